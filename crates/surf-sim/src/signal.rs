//! Post-processing of the raw syndrome sequence into training signals.

use std::ops::Range;

/// First difference of the syndrome sequence.
///
/// `first_deriv[s] = S[s] XOR S[s-1]`, with `S[0]` itself at s = 0.
pub fn first_derivative(syndromes: &[Vec<bool>]) -> Vec<Vec<bool>> {
    syndromes
        .iter()
        .enumerate()
        .map(|(s, row)| {
            if s < 1 {
                row.clone()
            } else {
                xor(row, &syndromes[s - 1])
            }
        })
        .collect()
}

/// Detection events: `events[s] = S[s] XOR S[s-2]`, with `S[s]` itself for
/// s < 2.
///
/// This is deliberately not the second difference of [`first_derivative`];
/// the two-step XOR (and its s < 2 fallback) is the labelling scheme the
/// downstream decoder is trained against and must be kept as is.
pub fn detection_events(syndromes: &[Vec<bool>]) -> Vec<Vec<bool>> {
    syndromes
        .iter()
        .enumerate()
        .map(|(s, row)| {
            if s < 2 {
                row.clone()
            } else {
                xor(row, &syndromes[s - 2])
            }
        })
        .collect()
}

/// Ground-truth decoding target.
///
/// `error_signal[s] = final_stabilizer[s] XOR first_deriv[s]`, with the
/// first derivative restricted to the condensed Z-ancilla range. It
/// isolates the component of the syndrome derivative attributable to the
/// final logical state.
pub fn error_signal(
    final_stabilizers: &[Vec<bool>],
    first_deriv: &[Vec<bool>],
    z_range: Range<usize>,
) -> Vec<Vec<bool>> {
    final_stabilizers
        .iter()
        .zip(first_deriv)
        .map(|(stabs, deriv)| xor(stabs, &deriv[z_range.clone()]))
        .collect()
}

fn xor(a: &[bool], b: &[bool]) -> Vec<bool> {
    debug_assert_eq!(a.len(), b.len());
    a.iter().zip(b).map(|(&x, &y)| x ^ y).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rows() -> Vec<Vec<bool>> {
        vec![
            vec![true, false, false],
            vec![true, true, false],
            vec![false, true, true],
        ]
    }

    #[test]
    fn first_derivative_starts_with_the_raw_syndrome() {
        let deriv = first_derivative(&rows());
        assert_eq!(deriv[0], vec![true, false, false]);
        assert_eq!(deriv[1], vec![false, true, false]);
        assert_eq!(deriv[2], vec![true, false, true]);
    }

    #[test]
    fn events_fall_back_to_raw_syndromes_below_two() {
        let events = detection_events(&rows());
        assert_eq!(events[0], vec![true, false, false]);
        assert_eq!(events[1], vec![true, true, false]);
        assert_eq!(events[2], vec![true, true, true]);
    }

    #[test]
    fn error_signal_restricts_to_the_z_range() {
        let stabs = vec![vec![true], vec![false]];
        let deriv = vec![vec![false, false, true], vec![false, true, true]];
        let signal = error_signal(&stabs, &deriv, 2..3);
        assert_eq!(signal, vec![vec![false], vec![true]]);
    }
}

/// Error state of a single physical qubit.
///
/// Two independent booleans fully determine the error class:
/// `00` no error, `10` X error, `11` Y error, `01` Z error. No other qubit
/// state is tracked anywhere in the simulator.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ErrorState {
    /// An X-type (bit-flip) error is present.
    pub bitflip: bool,
    /// A Z-type (phase-flip) error is present.
    pub phaseflip: bool,
}

impl ErrorState {
    /// Resets the qubit to the error-free state.
    pub fn clear(&mut self) {
        *self = ErrorState::default();
    }

    /// Hadamard conjugation: exchanges bit-flip and phase-flip errors.
    ///
    /// A Y error picks up a global phase that has no observable effect and
    /// is ignored.
    pub fn hadamard(&mut self) {
        std::mem::swap(&mut self.bitflip, &mut self.phaseflip);
    }
}

/// Propagates errors through a CNOT gate.
///
/// An X (or Y) error on the control toggles the target's bit-flip; a Z (or
/// Y) error on the target toggles the control's phase-flip. Which qubit is
/// control and which is target depends on the ancilla type and must not be
/// swapped: for X-ancillas the ancilla is the control, for Z-ancillas the
/// data qubit is.
pub fn cnot(control: &mut ErrorState, target: &mut ErrorState) {
    if control.bitflip {
        target.bitflip = !target.bitflip;
    }
    if target.phaseflip {
        control.phaseflip = !control.phaseflip;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state(bitflip: bool, phaseflip: bool) -> ErrorState {
        ErrorState { bitflip, phaseflip }
    }

    #[test]
    fn hadamard_is_an_involution() {
        for &(b, p) in &[(false, false), (true, false), (false, true), (true, true)] {
            let mut qb = state(b, p);
            qb.hadamard();
            qb.hadamard();
            assert_eq!(qb, state(b, p));
        }
    }

    #[test]
    fn hadamard_exchanges_flip_types() {
        let mut qb = state(true, false);
        qb.hadamard();
        assert_eq!(qb, state(false, true));
    }

    #[test]
    fn cnot_copies_bitflip_onto_target() {
        let mut c = state(true, false);
        let mut t = state(false, false);
        cnot(&mut c, &mut t);
        assert_eq!(c, state(true, false));
        assert_eq!(t, state(true, false));
    }

    #[test]
    fn cnot_copies_phaseflip_onto_control() {
        let mut c = state(false, false);
        let mut t = state(false, true);
        cnot(&mut c, &mut t);
        assert_eq!(c, state(false, true));
        assert_eq!(t, state(false, true));
    }

    #[test]
    fn cnot_action_table() {
        // (control in, target in) -> (control out, target out), all 16 cases.
        for cb in [false, true] {
            for cp in [false, true] {
                for tb in [false, true] {
                    for tp in [false, true] {
                        let mut c = state(cb, cp);
                        let mut t = state(tb, tp);
                        cnot(&mut c, &mut t);
                        assert_eq!(c, state(cb, cp ^ tp));
                        assert_eq!(t, state(tb ^ cb, tp));
                    }
                }
            }
        }
    }
}

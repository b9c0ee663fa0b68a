//! Spinner frames for "working on it" text.

/// Braille spinner characters.
const SPINNER: [char; 10] = ['⠋', '⠙', '⠹', '⠸', '⠼', '⠴', '⠦', '⠧', '⠇', '⠏'];

/// Spinner frame for an elapsed time; advances every 100ms.
pub fn spinner_char(elapsed_ms: u64) -> char {
    SPINNER[((elapsed_ms / 100) % SPINNER.len() as u64) as usize]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spinner_cycles() {
        assert_eq!(spinner_char(0), '⠋');
        assert_eq!(spinner_char(99), '⠋');
        assert_eq!(spinner_char(100), '⠙');
        assert_eq!(spinner_char(1000), '⠋');
    }
}

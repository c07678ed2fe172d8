// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

/// Wrap the given value (or unit) in [`Ok`]. Reads better at the tail of a long fallible
/// function than a bare `Ok(())`.
///
/// ```
/// use keyline::ok;
///
/// fn unit() -> std::io::Result<()> { ok!() }
/// fn value() -> std::io::Result<u8> { ok!(42) }
///
/// assert!(unit().is_ok());
/// assert_eq!(value().unwrap(), 42);
/// ```
#[macro_export]
macro_rules! ok {
    () => {
        Ok(())
    };
    ($value:expr) => {
        Ok($value)
    };
}

/// Error code registry for listfold
///
/// Error codes are organized by category:
/// - 1000-1999: Configuration errors
/// - 2000-2999: Sequence construction errors
/// - 3000-3999: Iteration errors
/// - 7000-7999: Validation errors
/// - 9000-9999: Other errors
pub struct ErrorCode;

impl ErrorCode {
    // Configuration errors (1000-1999)
    pub const CONFIG_GENERIC: u16 = 1000;
    pub const CONFIG_NOT_FOUND: u16 = 1001;
    pub const CONFIG_INVALID_TOML: u16 = 1002;
    pub const CONFIG_IO_ERROR: u16 = 1003;

    // Sequence errors (2000-2999)
    pub const SEQUENCE_GENERIC: u16 = 2000;
    pub const SEQUENCE_INVALID_STEP: u16 = 2001;
    pub const SEQUENCE_UNREACHABLE_END: u16 = 2002;
    pub const SEQUENCE_NON_FINITE: u16 = 2003;

    // Iteration errors (3000-3999)
    pub const ITERATION_GENERIC: u16 = 3000;
    pub const ITERATION_COMBINER_FAILED: u16 = 3001;
    pub const ITERATION_EMPTY_ACCUMULATOR: u16 = 3002;

    // Validation errors (7000-7999)
    pub const VALIDATION_GENERIC: u16 = 7000;
    pub const VALIDATION_OUT_OF_RANGE: u16 = 7001;
    pub const VALIDATION_NON_FINITE: u16 = 7002;
    pub const VALIDATION_INVALID_FORMAT: u16 = 7003;

    // Other errors (9000-9999)
    pub const OTHER_GENERIC: u16 = 9000;
}

/// Get a human-readable description for an error code
pub fn describe_error_code(code: u16) -> &'static str {
    match code {
        ErrorCode::CONFIG_GENERIC => "General configuration error",
        ErrorCode::CONFIG_NOT_FOUND => "Configuration file not found",
        ErrorCode::CONFIG_INVALID_TOML => "Invalid TOML in configuration file",
        ErrorCode::CONFIG_IO_ERROR => "Configuration file could not be read",

        ErrorCode::SEQUENCE_GENERIC => "General sequence error",
        ErrorCode::SEQUENCE_INVALID_STEP => "Sequence step must be finite and non-zero",
        ErrorCode::SEQUENCE_UNREACHABLE_END => "Sequence end cannot be reached with this step",
        ErrorCode::SEQUENCE_NON_FINITE => "Sequence bounds must be finite",

        ErrorCode::ITERATION_GENERIC => "General iteration error",
        ErrorCode::ITERATION_COMBINER_FAILED => "Combining function failed",
        ErrorCode::ITERATION_EMPTY_ACCUMULATOR => "Accumulator was empty when its last value was read",

        ErrorCode::VALIDATION_GENERIC => "General validation error",
        ErrorCode::VALIDATION_OUT_OF_RANGE => "Value out of range",
        ErrorCode::VALIDATION_NON_FINITE => "Value must be finite",
        ErrorCode::VALIDATION_INVALID_FORMAT => "Unknown output format",

        ErrorCode::OTHER_GENERIC => "Unknown error",
        _ => "Unrecognized error code",
    }
}

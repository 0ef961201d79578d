//! Console command grammar.
//!
//! A command line is a case-sensitive name followed by an optional
//! argument, separated by whitespace or `=`:
//!
//! ```text
//! SET_OS=80      SET_OS 80      SET_OS = 80
//! ```
//!
//! The name is looked up by exact match in a closed table, so a longer
//! command can never be shadowed by a shorter one that happens to be its
//! prefix.

/// Lowest threshold the sensor accepts through the console (°C)
pub const THRESHOLD_MIN_C: i32 = 0;

/// Highest threshold the sensor accepts through the console (°C)
pub const THRESHOLD_MAX_C: i32 = 127;

/// Poll interval floor (ms); shorter requests are clamped up to this
pub const MIN_POLL_INTERVAL_MS: u32 = 10;

/// Which alert threshold register a command addresses
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ThresholdKind {
    /// Over-temperature shutdown threshold (T_os)
    Overtemp,
    /// Hysteresis release threshold (T_hyst)
    Hysteresis,
}

impl ThresholdKind {
    /// Register name as printed to the operator
    pub const fn label(self) -> &'static str {
        match self {
            ThresholdKind::Overtemp => "T_os",
            ThresholdKind::Hysteresis => "T_hyst",
        }
    }

    /// Console command that sets this threshold
    pub const fn command_name(self) -> &'static str {
        match self {
            ThresholdKind::Overtemp => "SET_OS",
            ThresholdKind::Hysteresis => "SET_HYST",
        }
    }

    /// Whether `value` is a threshold the console will accept
    pub fn accepts(value: i32) -> bool {
        (THRESHOLD_MIN_C..=THRESHOLD_MAX_C).contains(&value)
    }
}

/// A parsed console command
///
/// Arguments are carried as parsed, unvalidated; range checks belong to
/// whoever applies the command so that rejections can be reported with
/// the offending value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Command {
    /// `SET_OS` / `SET_HYST`
    SetThreshold(ThresholdKind, i32),
    /// `SET_DELAY` - poll interval in milliseconds
    SetDelay(i32),
    /// `GET_TEMP` - one immediate read
    GetTemp,
    /// `PAUSE` - stop periodic polling
    Pause,
    /// `START` - resume periodic polling
    Start,
    /// `HELP` - print the command list
    Help,
    /// `STATUS` - print stored settings and device thresholds
    Status,
}

/// Errors from command parsing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum CommandError {
    /// Line held nothing but whitespace
    Empty,
    /// Name did not match any entry in the command table
    Unknown,
}

type Builder = fn(&str) -> Command;

/// Command table: exact name → builder taking the raw argument text
const COMMANDS: &[(&str, Builder)] = &[
    ("SET_OS", build_set_os),
    ("SET_HYST", build_set_hyst),
    ("SET_DELAY", build_set_delay),
    ("GET_TEMP", build_get_temp),
    ("PAUSE", build_pause),
    ("START", build_start),
    ("HELP", build_help),
    ("STATUS", build_status),
];

fn build_set_os(arg: &str) -> Command {
    Command::SetThreshold(ThresholdKind::Overtemp, parse_argument(arg))
}

fn build_set_hyst(arg: &str) -> Command {
    Command::SetThreshold(ThresholdKind::Hysteresis, parse_argument(arg))
}

fn build_set_delay(arg: &str) -> Command {
    Command::SetDelay(parse_argument(arg))
}

fn build_get_temp(_: &str) -> Command {
    Command::GetTemp
}

fn build_pause(_: &str) -> Command {
    Command::Pause
}

fn build_start(_: &str) -> Command {
    Command::Start
}

fn build_help(_: &str) -> Command {
    Command::Help
}

fn build_status(_: &str) -> Command {
    Command::Status
}

impl Command {
    /// Parse one input line
    pub fn parse(line: &str) -> Result<Self, CommandError> {
        let line = line.trim();
        if line.is_empty() {
            return Err(CommandError::Empty);
        }

        let split = line
            .find(|c: char| c.is_whitespace() || c == '=')
            .unwrap_or(line.len());
        let (name, rest) = line.split_at(split);

        COMMANDS
            .iter()
            .find(|(entry, _)| *entry == name)
            .map(|(_, build)| build(rest))
            .ok_or(CommandError::Unknown)
    }

    /// Names of every supported command, in table order
    pub fn names() -> impl Iterator<Item = &'static str> {
        COMMANDS.iter().map(|(name, _)| *name)
    }
}

/// Extract the numeric argument from the text following a command name
///
/// Surrounding whitespace is stripped, then everything up to and including
/// the first `=` (if any), then the remainder is converted with
/// [`parse_int_lenient`].
pub fn parse_argument(rest: &str) -> i32 {
    let rest = rest.trim();
    let value = match rest.find('=') {
        Some(pos) => &rest[pos + 1..],
        None => rest,
    };
    parse_int_lenient(value.trim())
}

/// Leading-integer conversion
///
/// Accepts an optional sign followed by decimal digits and stops at the
/// first other character. Text with no leading digits converts to 0.
/// Values beyond `i32` saturate.
pub fn parse_int_lenient(s: &str) -> i32 {
    let s = s.trim_start();
    let (negative, digits) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };

    let mut value: i64 = 0;
    for b in digits.bytes() {
        if !b.is_ascii_digit() {
            break;
        }
        value = value * 10 + i64::from(b - b'0');
        if value > i64::from(i32::MAX) + 1 {
            break;
        }
    }

    let value = if negative { -value } else { value };
    value.clamp(i64::from(i32::MIN), i64::from(i32::MAX)) as i32
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_equals_separator() {
        assert_eq!(
            Command::parse("SET_OS=200"),
            Ok(Command::SetThreshold(ThresholdKind::Overtemp, 200))
        );
    }

    #[test]
    fn test_space_separator() {
        assert_eq!(
            Command::parse("SET_OS 50"),
            Ok(Command::SetThreshold(ThresholdKind::Overtemp, 50))
        );
        assert_eq!(
            Command::parse("  SET_HYST   45  "),
            Ok(Command::SetThreshold(ThresholdKind::Hysteresis, 45))
        );
    }

    #[test]
    fn test_spaced_equals_separator() {
        assert_eq!(Command::parse("SET_DELAY = 250"), Ok(Command::SetDelay(250)));
        assert_eq!(Command::parse("SET_DELAY=-5"), Ok(Command::SetDelay(-5)));
    }

    #[test]
    fn test_plain_commands() {
        assert_eq!(Command::parse("GET_TEMP"), Ok(Command::GetTemp));
        assert_eq!(Command::parse("PAUSE"), Ok(Command::Pause));
        assert_eq!(Command::parse("START"), Ok(Command::Start));
        assert_eq!(Command::parse("HELP"), Ok(Command::Help));
        assert_eq!(Command::parse("STATUS"), Ok(Command::Status));
        // Trailing words after an argument-less command are ignored
        assert_eq!(Command::parse("PAUSE now"), Ok(Command::Pause));
    }

    #[test]
    fn test_case_sensitive() {
        assert_eq!(Command::parse("set_os=10"), Err(CommandError::Unknown));
        assert_eq!(Command::parse("Help"), Err(CommandError::Unknown));
    }

    #[test]
    fn test_exact_match_no_prefix_collision() {
        // Prefix of a known command, and a known command with a suffix
        assert_eq!(Command::parse("SET_O=5"), Err(CommandError::Unknown));
        assert_eq!(Command::parse("SET_OS_ALL=5"), Err(CommandError::Unknown));
        assert_eq!(Command::parse("STARTX"), Err(CommandError::Unknown));
    }

    #[test]
    fn test_empty_line() {
        assert_eq!(Command::parse(""), Err(CommandError::Empty));
        assert_eq!(Command::parse("   \t"), Err(CommandError::Empty));
    }

    #[test]
    fn test_non_numeric_argument_is_zero() {
        assert_eq!(
            Command::parse("SET_OS=abc"),
            Ok(Command::SetThreshold(ThresholdKind::Overtemp, 0))
        );
        assert_eq!(
            Command::parse("SET_HYST"),
            Ok(Command::SetThreshold(ThresholdKind::Hysteresis, 0))
        );
    }

    #[test]
    fn test_parse_int_lenient() {
        assert_eq!(parse_int_lenient("42"), 42);
        assert_eq!(parse_int_lenient("-7"), -7);
        assert_eq!(parse_int_lenient("+9"), 9);
        assert_eq!(parse_int_lenient("12abc"), 12);
        assert_eq!(parse_int_lenient("abc"), 0);
        assert_eq!(parse_int_lenient("-"), 0);
        assert_eq!(parse_int_lenient(""), 0);
        assert_eq!(parse_int_lenient("99999999999"), i32::MAX);
        assert_eq!(parse_int_lenient("-99999999999"), i32::MIN);
    }

    #[test]
    fn test_names_listed() {
        let mut names = Command::names();
        assert_eq!(names.next(), Some("SET_OS"));
        assert_eq!(Command::names().count(), 8);
    }

    #[test]
    fn test_threshold_labels() {
        assert_eq!(ThresholdKind::Overtemp.label(), "T_os");
        assert_eq!(ThresholdKind::Hysteresis.command_name(), "SET_HYST");
        assert!(ThresholdKind::accepts(0));
        assert!(ThresholdKind::accepts(127));
        assert!(!ThresholdKind::accepts(-1));
        assert!(!ThresholdKind::accepts(128));
    }

    proptest! {
        #[test]
        fn prop_integer_arguments_round_trip(x in any::<i32>()) {
            let eq = format!("SET_DELAY={}", x);
            let sp = format!("SET_DELAY {}", x);
            prop_assert_eq!(Command::parse(&eq), Ok(Command::SetDelay(x)));
            prop_assert_eq!(Command::parse(&sp), Ok(Command::SetDelay(x)));
        }

        #[test]
        fn prop_lenient_parse_ignores_trailing_text(x in 0i32..100_000, tail in "[a-zA-Z ]{0,8}") {
            let s = format!("{}{}", x, tail);
            prop_assert_eq!(parse_int_lenient(&s), x);
        }
    }
}

//! Command parsing
//!
//! A command line is split at the first `:` into a name and a value. The
//! name is looked up in a fixed dispatch table, then the value is parsed
//! according to that command. Matching is exact and case-sensitive.

/// A command line split into its name and value
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RawCommand<'a> {
    /// Text before the first colon (the whole line if there is none)
    pub name: &'a str,
    /// Text after the first colon (empty if there is none)
    pub value: &'a str,
}

/// Split a line at its first colon
pub fn split_command(line: &str) -> RawCommand<'_> {
    match line.split_once(':') {
        Some((name, value)) => RawCommand { name, value },
        None => RawCommand {
            name: line,
            value: "",
        },
    }
}

/// Errors that can occur while parsing a command
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ParseError {
    /// Name is not in the dispatch table
    UnknownCommand,
    /// Name is known but the value does not fit it
    InvalidValue,
}

/// Known command names
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum CommandName {
    Brightness,
    Power,
    Status,
    SunPos,
    Emo,
}

const COMMAND_TABLE: &[(&str, CommandName)] = &[
    ("brightness", CommandName::Brightness),
    ("power", CommandName::Power),
    ("status", CommandName::Status),
    ("sunpos", CommandName::SunPos),
    ("emo", CommandName::Emo),
];

impl CommandName {
    /// Look up a command by its wire name
    pub fn lookup(name: &str) -> Option<Self> {
        COMMAND_TABLE
            .iter()
            .find(|(wire, _)| *wire == name)
            .map(|(_, command)| *command)
    }

    /// Parse the value half of a command line for this command
    pub fn parse_value(self, value: &str) -> Result<Command, ParseError> {
        match self {
            CommandName::Brightness => value
                .parse::<i32>()
                .map(Command::Brightness)
                .map_err(|_| ParseError::InvalidValue),
            CommandName::Power => match value {
                "on" => Ok(Command::Power(Power::On)),
                "off" => Ok(Command::Power(Power::Off)),
                _ => Err(ParseError::InvalidValue),
            },
            CommandName::Status => Status::from_wire(value)
                .map(Command::Status)
                .ok_or(ParseError::InvalidValue),
            CommandName::SunPos => SunFix::parse(value).map(Command::SunPos),
            CommandName::Emo => match value {
                "1" => Ok(Command::Emotion(Emotion::Open)),
                "2" => Ok(Command::Emotion(Emotion::Close)),
                _ => Err(ParseError::InvalidValue),
            },
        }
    }
}

/// Light power switch
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Power {
    On,
    Off,
}

/// Values accepted by the `status` command
///
/// The first four select a mode. `Open`, `Close` and `Reset` act on the
/// head axis directly and leave the mode alone.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Status {
    Interactive,
    Sun,
    Environment,
    No,
    Open,
    Close,
    Reset,
}

impl Status {
    fn from_wire(value: &str) -> Option<Self> {
        match value {
            "interactive" => Some(Status::Interactive),
            "sun" => Some(Status::Sun),
            "environment" => Some(Status::Environment),
            "no" => Some(Status::No),
            "open" => Some(Status::Open),
            "close" => Some(Status::Close),
            "reset" => Some(Status::Reset),
            _ => None,
        }
    }
}

/// Preset expressions available in interactive mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Emotion {
    /// `emo:1`
    Open,
    /// `emo:2`
    Close,
}

/// Sun position as received from the host
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct SunFix {
    /// Compass bearing in degrees
    pub azimuth: f32,
    /// Elevation above the horizon in degrees
    pub altitude: f32,
}

impl SunFix {
    /// Parse `<azimuth>,<altitude>`
    pub fn parse(value: &str) -> Result<Self, ParseError> {
        let (azimuth, altitude) = value.split_once(',').ok_or(ParseError::InvalidValue)?;
        Ok(Self {
            azimuth: parse_finite(azimuth)?,
            altitude: parse_finite(altitude)?,
        })
    }
}

fn parse_finite(text: &str) -> Result<f32, ParseError> {
    match text.parse::<f32>() {
        Ok(value) if value.is_finite() => Ok(value),
        _ => Err(ParseError::InvalidValue),
    }
}

/// A fully parsed command
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Command {
    /// Brightness in percent, not range checked
    Brightness(i32),
    Power(Power),
    Status(Status),
    SunPos(SunFix),
    Emotion(Emotion),
}

impl Command {
    /// Parse a complete command line
    pub fn parse(line: &str) -> Result<Self, ParseError> {
        Self::try_from(split_command(line))
    }

    /// Name of this command in the dispatch table
    pub fn name(&self) -> CommandName {
        match self {
            Command::Brightness(_) => CommandName::Brightness,
            Command::Power(_) => CommandName::Power,
            Command::Status(_) => CommandName::Status,
            Command::SunPos(_) => CommandName::SunPos,
            Command::Emotion(_) => CommandName::Emo,
        }
    }
}

impl TryFrom<RawCommand<'_>> for Command {
    type Error = ParseError;

    fn try_from(raw: RawCommand<'_>) -> Result<Self, Self::Error> {
        CommandName::lookup(raw.name)
            .ok_or(ParseError::UnknownCommand)?
            .parse_value(raw.value)
    }
}

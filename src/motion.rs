//! Breakpoint tables that turn a progress scalar into style values.

use std::fmt;

use thiserror::Error;

const MIN_BREAKPOINTS: usize = 2;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rgba {
    pub r: f64,
    pub g: f64,
    pub b: f64,
    pub a: f64,
}

impl Rgba {
    pub const fn new(r: f64, g: f64, b: f64, a: f64) -> Self {
        Self { r, g, b, a }
    }

    fn from_hex(digits: &str) -> Option<Self> {
        if !digits.chars().all(|c| c.is_ascii_hexdigit()) {
            return None;
        }

        let channel = |range: std::ops::Range<usize>| {
            u8::from_str_radix(&digits[range], 16)
                .ok()
                .map(f64::from)
        };
        let short = |index: usize| channel(index..index + 1).map(|value| value * 17.0);

        match digits.len() {
            3 => Some(Self::new(short(0)?, short(1)?, short(2)?, 1.0)),
            4 => Some(Self::new(short(0)?, short(1)?, short(2)?, short(3)? / 255.0)),
            6 => Some(Self::new(channel(0..2)?, channel(2..4)?, channel(4..6)?, 1.0)),
            8 => Some(Self::new(
                channel(0..2)?,
                channel(2..4)?,
                channel(4..6)?,
                channel(6..8)? / 255.0,
            )),
            _ => None,
        }
    }

    fn from_function(body: &str, expect_alpha: bool) -> Option<Self> {
        let parts = body
            .split(',')
            .map(parse_finite)
            .collect::<Option<Vec<_>>>()?;

        match (parts.as_slice(), expect_alpha) {
            ([r, g, b], false) => Some(Self::new(*r, *g, *b, 1.0)),
            ([r, g, b, a], true) => Some(Self::new(*r, *g, *b, *a)),
            _ => None,
        }
    }

    fn is_finite(&self) -> bool {
        [self.r, self.g, self.b, self.a].iter().all(|channel| channel.is_finite())
    }

    fn lerp(self, to: Self, t: f64) -> Self {
        Self::new(
            lerp(self.r, to.r, t),
            lerp(self.g, to.g, t),
            lerp(self.b, to.b, t),
            lerp(self.a, to.a, t),
        )
    }
}

impl fmt::Display for Rgba {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let channel = |value: f64| value.round().clamp(0.0, 255.0) as u8;
        let alpha = (self.a.clamp(0.0, 1.0) * 1000.0).round() / 1000.0;
        write!(
            f,
            "rgba({}, {}, {}, {alpha})",
            channel(self.r),
            channel(self.g),
            channel(self.b)
        )
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Unit {
    Percent,
    Px,
    Vh,
    Vw,
    Deg,
}

impl Unit {
    const ALL: [Unit; 5] = [Unit::Percent, Unit::Px, Unit::Vh, Unit::Vw, Unit::Deg];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Percent => "%",
            Self::Px => "px",
            Self::Vh => "vh",
            Self::Vw => "vw",
            Self::Deg => "deg",
        }
    }
}

/// A single output value of a breakpoint table.
#[derive(Clone, Debug, PartialEq)]
pub enum Value {
    Number(f64),
    Length { amount: f64, unit: Unit },
    Color(Rgba),
    /// Never interpolated; switches halfway through its segment.
    Discrete(String),
}

impl Value {
    pub fn parse(raw: &str) -> Self {
        let trimmed = raw.trim();

        if let Some(digits) = trimmed.strip_prefix('#') {
            if let Some(color) = Rgba::from_hex(digits) {
                return Self::Color(color);
            }
        }

        if let Some(body) = trimmed
            .strip_prefix("rgba(")
            .and_then(|rest| rest.strip_suffix(')'))
        {
            if let Some(color) = Rgba::from_function(body, true) {
                return Self::Color(color);
            }
        } else if let Some(body) = trimmed
            .strip_prefix("rgb(")
            .and_then(|rest| rest.strip_suffix(')'))
        {
            if let Some(color) = Rgba::from_function(body, false) {
                return Self::Color(color);
            }
        }

        if let Some(amount) = parse_finite(trimmed) {
            return Self::Number(amount);
        }

        for unit in Unit::ALL {
            if let Some(amount) = trimmed.strip_suffix(unit.as_str()).and_then(parse_finite) {
                return Self::Length { amount, unit };
            }
        }

        Self::Discrete(trimmed.to_string())
    }

    pub fn px(amount: f64) -> Self {
        Self::Length {
            amount,
            unit: Unit::Px,
        }
    }

    pub fn percent(amount: f64) -> Self {
        Self::Length {
            amount,
            unit: Unit::Percent,
        }
    }

    pub fn deg(amount: f64) -> Self {
        Self::Length {
            amount,
            unit: Unit::Deg,
        }
    }

    /// Discrete values are always finite; everything else must be a real
    /// number in every component.
    pub fn is_finite(&self) -> bool {
        match self {
            Self::Number(amount) | Self::Length { amount, .. } => amount.is_finite(),
            Self::Color(color) => color.is_finite(),
            Self::Discrete(_) => true,
        }
    }

    fn kind(&self) -> &'static str {
        match self {
            Self::Number(_) => "number",
            Self::Length { unit, .. } => unit.as_str(),
            Self::Color(_) => "color",
            Self::Discrete(_) => "discrete",
        }
    }

    fn interpolate(&self, to: &Self, t: f64) -> Self {
        match (self, to) {
            (Self::Number(from), Self::Number(to)) => Self::Number(lerp(*from, *to, t)),
            (
                Self::Length { amount: from, unit },
                Self::Length { amount: to, .. },
            ) => Self::Length {
                amount: lerp(*from, *to, t),
                unit: *unit,
            },
            (Self::Color(from), Self::Color(to)) => Self::Color(from.lerp(*to, t)),
            _ => {
                if t < 0.5 {
                    self.clone()
                } else {
                    to.clone()
                }
            }
        }
    }
}

/// `f64::from_str` also accepts `nan` and `inf`; those are not CSS numbers.
fn parse_finite(raw: &str) -> Option<f64> {
    raw.trim()
        .parse::<f64>()
        .ok()
        .filter(|amount| amount.is_finite())
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Self::parse(value)
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(amount) => write!(f, "{}", round_for_css(*amount)),
            Self::Length { amount, unit } => {
                write!(f, "{}{}", round_for_css(*amount), unit.as_str())
            }
            Self::Color(color) => color.fmt(f),
            Self::Discrete(text) => f.write_str(text),
        }
    }
}

#[derive(Debug, Error, PartialEq)]
pub enum MappingError {
    #[error("a breakpoint mapping needs at least two entries, got {found}")]
    TooFewBreakpoints { found: usize },
    #[error("breakpoint {index} has a non-finite progress value")]
    NonFiniteProgress { index: usize },
    #[error("breakpoint {index} has a non-finite output value")]
    NonFiniteValue { index: usize },
    #[error("breakpoint {index} goes backwards ({progress} after {previous})")]
    Unordered {
        index: usize,
        previous: f64,
        progress: f64,
    },
    #[error("breakpoint {index} mixes a {found} value into a {expected} mapping")]
    MismatchedValues {
        index: usize,
        expected: &'static str,
        found: &'static str,
    },
}

/// An immutable, validated breakpoint table.
///
/// Progress values never decrease and neighbouring values share a kind, so
/// every segment between two stops can be sampled.
#[derive(Clone, Debug, PartialEq)]
pub struct Mapping {
    stops: Vec<(f64, Value)>,
}

impl Mapping {
    pub fn new<V>(stops: impl IntoIterator<Item = (f64, V)>) -> Result<Self, MappingError>
    where
        V: Into<Value>,
    {
        let stops = stops
            .into_iter()
            .map(|(progress, value)| (progress, value.into()))
            .collect::<Vec<_>>();

        if stops.len() < MIN_BREAKPOINTS {
            return Err(MappingError::TooFewBreakpoints { found: stops.len() });
        }

        for (index, (progress, value)) in stops.iter().enumerate() {
            if !progress.is_finite() {
                return Err(MappingError::NonFiniteProgress { index });
            }
            if !value.is_finite() {
                return Err(MappingError::NonFiniteValue { index });
            }
        }

        for (index, pair) in stops.windows(2).enumerate() {
            let (previous, previous_value) = &pair[0];
            let (progress, value) = &pair[1];

            if progress < previous {
                return Err(MappingError::Unordered {
                    index: index + 1,
                    previous: *previous,
                    progress: *progress,
                });
            }

            if previous_value.kind() != value.kind() {
                return Err(MappingError::MismatchedValues {
                    index: index + 1,
                    expected: previous_value.kind(),
                    found: value.kind(),
                });
            }
        }

        Ok(Self { stops })
    }

    pub fn sample(&self, progress: f64) -> Value {
        let (first_progress, first_value) = &self.stops[0];
        let (last_progress, last_value) = &self.stops[self.stops.len() - 1];

        if progress.is_nan() || progress <= *first_progress {
            return first_value.clone();
        }

        if progress >= *last_progress {
            return last_value.clone();
        }

        let upper = self.stops.partition_point(|(stop, _)| *stop <= progress);
        let (from_progress, from_value) = &self.stops[upper - 1];
        let (to_progress, to_value) = &self.stops[upper];
        let t = (progress - from_progress) / (to_progress - from_progress);

        from_value.interpolate(to_value, t)
    }
}

pub fn lerp(from: f64, to: f64, t: f64) -> f64 {
    from + (to - from) * t
}

fn round_for_css(value: f64) -> f64 {
    let rounded = (value * 10_000.0).round() / 10_000.0;
    if rounded == 0.0 {
        0.0
    } else {
        rounded
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    Left,
    Right,
    Up,
    Down,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Easing {
    EaseOut,
    Spring,
    Linear,
}

impl Easing {
    fn as_css(self) -> &'static str {
        match self {
            Self::EaseOut => "cubic-bezier(0, 0, 0.58, 1)",
            Self::Spring => "cubic-bezier(0.34, 1.56, 0.64, 1)",
            Self::Linear => "linear",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
enum Offset {
    Px(f64),
    Percent(f64),
}

impl fmt::Display for Offset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Px(amount) => write!(f, "{amount}px"),
            Self::Percent(amount) => write!(f, "{amount}%"),
        }
    }
}

/// One-shot entry animation played the first time a block scrolls into view.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Reveal {
    x: Offset,
    y: Offset,
    scale: f64,
    fade: bool,
    easing: Easing,
    delay: f64,
    duration: f64,
}

impl Reveal {
    pub fn fade_in(direction: Option<Direction>, easing: Easing, delay: f64, duration: f64) -> Self {
        let (x, y) = match direction {
            Some(Direction::Left) => (100.0, 0.0),
            Some(Direction::Right) => (-100.0, 0.0),
            Some(Direction::Up) => (0.0, 100.0),
            Some(Direction::Down) => (0.0, -100.0),
            None => (0.0, 0.0),
        };

        Self {
            x: Offset::Px(x),
            y: Offset::Px(y),
            scale: 1.0,
            fade: true,
            easing,
            delay,
            duration,
        }
    }

    pub fn slide_in(direction: Direction, easing: Easing, delay: f64, duration: f64) -> Self {
        let (x, y) = match direction {
            Direction::Left => (-100.0, 0.0),
            Direction::Right => (100.0, 0.0),
            Direction::Up | Direction::Down => (0.0, 100.0),
        };

        Self {
            x: Offset::Percent(x),
            y: Offset::Percent(y),
            scale: 1.0,
            fade: false,
            easing,
            delay,
            duration,
        }
    }

    pub fn zoom_in(delay: f64, duration: f64) -> Self {
        Self {
            x: Offset::Px(0.0),
            y: Offset::Px(0.0),
            scale: 0.0,
            fade: true,
            easing: Easing::EaseOut,
            delay,
            duration,
        }
    }

    pub fn text(delay: f64) -> Self {
        Self {
            x: Offset::Px(0.0),
            y: Offset::Px(-50.0),
            scale: 1.0,
            fade: true,
            easing: Easing::Spring,
            delay,
            duration: 1.25,
        }
    }

    pub fn hidden_style(&self) -> String {
        let mut style = format!(
            "translate: {} {}; scale: {};",
            self.x, self.y, self.scale
        );
        if self.fade {
            style.push_str(" opacity: 0;");
        }
        style
    }

    pub fn shown_style(&self) -> String {
        format!(
            "translate: 0 0; scale: 1; opacity: 1; transition: translate {d}s {e} {w}s, scale {d}s {e} {w}s, opacity {d}s {e} {w}s;",
            d = self.duration,
            e = self.easing.as_css(),
            w = self.delay,
        )
    }

    pub fn style(&self, shown: bool) -> String {
        if shown {
            self.shown_style()
        } else {
            self.hidden_style()
        }
    }
}

pub fn stagger(index: usize, step: f64) -> f64 {
    index as f64 * step
}

#[cfg(test)]
mod tests {
    use super::*;

    fn numbers(stops: &[(f64, f64)]) -> Mapping {
        Mapping::new(stops.iter().copied()).unwrap()
    }

    #[test]
    fn clamps_before_first_and_after_last_breakpoint() {
        let mapping = numbers(&[(0.2, 10.0), (0.6, 30.0)]);

        for progress in [-1.0, 0.0, 0.1, 0.2] {
            assert_eq!(mapping.sample(progress), Value::Number(10.0));
        }
        for progress in [0.6, 0.61, 1.0, 42.0] {
            assert_eq!(mapping.sample(progress), Value::Number(30.0));
        }
    }

    #[test]
    fn interpolates_linearly_between_neighbours() {
        let mapping = numbers(&[(0.15, 0.0), (0.4, 1.0), (0.6, 1.0), (0.85, 0.0)]);
        let (p0, v0, p1, v1) = (0.15, 0.0, 0.4, 1.0);

        for progress in [0.2, 0.25, 0.33, 0.39] {
            let expected = v0 + (v1 - v0) * (progress - p0) / (p1 - p0);
            let Value::Number(actual) = mapping.sample(progress) else {
                panic!("expected a number");
            };
            assert!((actual - expected).abs() < 1e-12, "{actual} != {expected}");
        }

        assert_eq!(mapping.sample(0.5), Value::Number(1.0));
        let Value::Number(falling) = mapping.sample(0.725) else {
            panic!("expected a number");
        };
        assert!((falling - 0.5).abs() < 1e-9);
    }

    #[test]
    fn sampling_is_repeatable() {
        let mapping = Mapping::new([(0.0, "100%"), (0.25, "0%")]).unwrap();

        let first = mapping.sample(0.1);
        let second = mapping.sample(0.1);

        assert_eq!(first, second);
        assert_eq!(first, Value::percent(60.0));
    }

    #[test]
    fn color_midpoint_averages_each_channel() {
        let mapping = Mapping::new([(0.0, "#333333"), (1.0, "#ffffff")]).unwrap();

        let midpoint = mapping.sample(0.5);

        assert_eq!(midpoint, Value::Color(Rgba::new(153.0, 153.0, 153.0, 1.0)));
        assert_eq!(midpoint.to_string(), "rgba(153, 153, 153, 1)");
    }

    #[test]
    fn discrete_values_switch_at_segment_midpoint() {
        let mapping = Mapping::new([(0.0, "hidden"), (1.0, "visible")]).unwrap();

        assert_eq!(mapping.sample(0.49), Value::Discrete("hidden".into()));
        assert_eq!(mapping.sample(0.5), Value::Discrete("visible".into()));
    }

    #[test]
    fn repeated_progress_acts_as_a_hard_cut() {
        let mapping = numbers(&[(0.0, 0.0), (0.5, 0.0), (0.5, 1.0), (1.0, 1.0)]);

        assert_eq!(mapping.sample(0.49), Value::Number(0.0));
        assert_eq!(mapping.sample(0.5), Value::Number(1.0));
    }

    #[test]
    fn single_breakpoint_is_a_configuration_error() {
        let error = Mapping::new([(0.0, 1.0)]).unwrap_err();

        assert_eq!(error, MappingError::TooFewBreakpoints { found: 1 });
    }

    #[test]
    fn decreasing_progress_is_rejected() {
        let error = numbers_result(&[(0.5, 0.0), (0.2, 1.0)]).unwrap_err();

        assert!(matches!(error, MappingError::Unordered { index: 1, .. }));
    }

    #[test]
    fn mixed_value_kinds_are_rejected() {
        let error = Mapping::new([(0.0, "100%"), (1.0, "0px")]).unwrap_err();

        assert_eq!(
            error,
            MappingError::MismatchedValues {
                index: 1,
                expected: "%",
                found: "px",
            }
        );
    }

    #[test]
    fn non_finite_outputs_fail_at_construction() {
        assert_eq!(
            numbers_result(&[(0.0, f64::NAN), (1.0, 1.0)]).unwrap_err(),
            MappingError::NonFiniteValue { index: 0 }
        );
        assert_eq!(
            numbers_result(&[(0.0, 0.0), (1.0, f64::INFINITY)]).unwrap_err(),
            MappingError::NonFiniteValue { index: 1 }
        );
        assert!(Mapping::new([(0.0, "inf"), (1.0, "0")]).is_err());
        assert_eq!(
            Mapping::new([(0.0, Value::px(f64::NEG_INFINITY)), (1.0, Value::px(0.0))]).unwrap_err(),
            MappingError::NonFiniteValue { index: 0 }
        );
        assert_eq!(
            Mapping::new([
                (0.0, Value::Color(Rgba::new(f64::NAN, 0.0, 0.0, 1.0))),
                (1.0, Value::Color(Rgba::new(0.0, 0.0, 0.0, 1.0))),
            ])
            .unwrap_err(),
            MappingError::NonFiniteValue { index: 0 }
        );
    }

    #[test]
    fn parses_css_literals() {
        assert_eq!(Value::parse("#fff"), Value::Color(Rgba::new(255.0, 255.0, 255.0, 1.0)));
        assert_eq!(
            Value::parse("rgba(145, 94, 255, 0.5)"),
            Value::Color(Rgba::new(145.0, 94.0, 255.0, 0.5))
        );
        assert_eq!(Value::parse("-80px"), Value::px(-80.0));
        assert_eq!(Value::parse("15deg"), Value::deg(15.0));
        assert_eq!(Value::parse("0.8"), Value::Number(0.8));
        assert_eq!(Value::parse("auto"), Value::Discrete("auto".into()));
        assert_eq!(Value::parse("nan"), Value::Discrete("nan".into()));
        assert_eq!(Value::parse("inf"), Value::Discrete("inf".into()));
        assert_eq!(Value::parse("infinitypx"), Value::Discrete("infinitypx".into()));
        assert_eq!(
            Value::parse("rgb(nan, 0, 0)"),
            Value::Discrete("rgb(nan, 0, 0)".into())
        );
    }

    #[test]
    fn reveal_styles_start_offset_and_settle_at_rest() {
        let reveal = Reveal::fade_in(Some(Direction::Up), Easing::Spring, 0.5, 0.75);

        assert_eq!(reveal.hidden_style(), "translate: 0px 100px; scale: 1; opacity: 0;");
        assert!(reveal.shown_style().starts_with("translate: 0 0; scale: 1; opacity: 1;"));
        assert!(reveal.shown_style().contains("opacity 0.75s"));
        assert_eq!(stagger(3, 0.25), 0.75);
    }

    fn numbers_result(stops: &[(f64, f64)]) -> Result<Mapping, MappingError> {
        Mapping::new(stops.iter().copied())
    }
}

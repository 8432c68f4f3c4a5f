//! Stream host glue
//!
//! Adapts a textual G-code stream to the move-transform pipeline: `G0`/`G1`
//! lines become [`MoveTransform::move_to`] calls, and forwarded moves are
//! re-emitted as G-code by the innermost stage. Everything here is thin
//! integration; the filtering semantics live in `objexclude-filter`.

use objexclude_core::Position;
use objexclude_filter::MoveTransform;
use std::io::Write;

/// Axis words carried by one `G0`/`G1` line
///
/// Absent words leave the corresponding axis of the running target untouched
/// (absolute-coordinate interpretation).
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct MoveWords {
    /// X word, if present
    pub x: Option<f64>,
    /// Y word, if present
    pub y: Option<f64>,
    /// Z word, if present
    pub z: Option<f64>,
    /// E word, if present
    pub e: Option<f64>,
    /// F (feed) word, if present
    pub f: Option<f64>,
}

impl MoveWords {
    /// Fold these words into a running target and feed value
    pub fn apply(&self, target: &mut Position, feed: &mut f64) {
        if let Some(x) = self.x {
            target.x = x;
        }
        if let Some(y) = self.y {
            target.y = y;
        }
        if let Some(z) = self.z {
            target.z = z;
        }
        if let Some(e) = self.e {
            target.e = e;
        }
        if let Some(f) = self.f {
            *feed = f;
        }
    }
}

/// Parse a `G0`/`G1` line into its axis words
///
/// Returns `None` when the line is not a linear move or carries a word that
/// does not parse; such lines pass through the host untouched.
pub fn parse_move(line: &str) -> Option<MoveWords> {
    let mut tokens = line.split_whitespace();
    let opcode = tokens.next()?.to_uppercase();
    if !matches!(opcode.as_str(), "G0" | "G00" | "G1" | "G01") {
        return None;
    }

    let mut words = MoveWords::default();
    for token in tokens {
        // Inline comments end the word list.
        if token.starts_with(';') {
            break;
        }
        // Split on the first char, not byte 1: a multi-byte leading
        // character must reject the word, not panic.
        let mut chars = token.chars();
        let letter = chars.next()?;
        let value: f64 = chars.as_str().parse().ok()?;
        match letter.to_ascii_uppercase() {
            'X' => words.x = Some(value),
            'Y' => words.y = Some(value),
            'Z' => words.z = Some(value),
            'E' => words.e = Some(value),
            'F' => words.f = Some(value),
            _ => return None,
        }
    }
    Some(words)
}

/// Innermost pipeline stage: emits forwarded moves as G-code text
pub struct GcodeWriter<W: Write + Send> {
    out: W,
    position: Position,
}

impl<W: Write + Send> GcodeWriter<W> {
    /// Create a writer emitting to `out`, positioned at the origin
    pub fn new(out: W) -> Self {
        Self {
            out,
            position: Position::origin(),
        }
    }
}

impl<W: Write + Send> MoveTransform for GcodeWriter<W> {
    fn get_position(&mut self) -> Position {
        self.position
    }

    fn move_to(&mut self, target: Position, speed: f64) {
        self.position = target;
        if let Err(e) = writeln!(
            self.out,
            "G1 X{:.3} Y{:.3} Z{:.3} E{:.5} F{}",
            target.x, target.y, target.z, target.e, speed
        ) {
            tracing::error!(error = %e, "failed to emit move");
        }
    }
}

//! Call-site frames and stack traces
//!
//! A [`StackTrace`] is an ordered list of [`StackFrame`] values. Frames are
//! plain data: whatever introspection produced them fills in the fields it
//! knows, and rendering falls back to fixed placeholders for the rest.

use std::fmt;
use std::panic::Location;

/// Placeholder rendered when a frame has no source file
pub const UNKNOWN_FILE: &str = "**";

/// Placeholder rendered when a frame's class cannot be trusted
pub const UNKNOWN_CLASS: &str = "UnknownClass";

/// Placeholder rendered when a frame has no method name
pub const UNKNOWN_METHOD: &str = "UnknownMethod";

/// A single call-site record
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StackFrame {
    /// Source file name, if known
    pub file: Option<String>,
    /// Declaring type (or module) name, if known
    pub class: Option<String>,
    /// Method (or function) name, if known
    pub method: Option<String>,
    /// Line number within `file`
    pub line: u32,
    /// Column number within `line`
    pub column: u32,
}

impl StackFrame {
    /// Create a frame with a known position and no names
    pub fn new(line: u32, column: u32) -> Self {
        Self {
            line,
            column,
            ..Self::default()
        }
    }

    /// Set the source file name
    pub fn with_file(mut self, file: impl Into<String>) -> Self {
        self.file = Some(file.into());
        self
    }

    /// Set the declaring type name
    pub fn with_class(mut self, class: impl Into<String>) -> Self {
        self.class = Some(class.into());
        self
    }

    /// Set the method name
    pub fn with_method(mut self, method: impl Into<String>) -> Self {
        self.method = Some(method.into());
        self
    }

    /// Build a frame from a source location (file, line and column only)
    pub fn from_location(location: &Location<'_>) -> Self {
        Self::new(location.line(), location.column()).with_file(location.file())
    }

    /// Capture the caller's source location
    #[track_caller]
    pub fn caller() -> Self {
        Self::from_location(Location::caller())
    }

    /// Class name as rendered.
    ///
    /// The class is only trusted when the method name is known.
    pub fn class_or_unknown(&self) -> &str {
        match (&self.method, &self.class) {
            (Some(_), Some(class)) => class.as_str(),
            _ => UNKNOWN_CLASS,
        }
    }

    /// Method name as rendered
    pub fn method_or_unknown(&self) -> &str {
        self.method.as_deref().unwrap_or(UNKNOWN_METHOD)
    }

    /// File name as rendered
    pub fn file_or_unknown(&self) -> &str {
        self.file.as_deref().unwrap_or(UNKNOWN_FILE)
    }
}

impl fmt::Display for StackFrame {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}.{} in {}({},{})",
            self.class_or_unknown(),
            self.method_or_unknown(),
            self.file_or_unknown(),
            self.line,
            self.column
        )
    }
}

/// An ordered sequence of frames, in the order they were captured
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StackTrace {
    frames: Vec<StackFrame>,
}

impl StackTrace {
    /// Create a trace from frames, keeping their order
    pub fn new(frames: Vec<StackFrame>) -> Self {
        Self { frames }
    }

    /// A single-frame trace pointing at the caller
    #[track_caller]
    pub fn here() -> Self {
        Self::new(vec![StackFrame::from_location(Location::caller())])
    }

    /// Append a frame
    pub fn push(&mut self, frame: StackFrame) {
        self.frames.push(frame);
    }

    pub fn frames(&self) -> &[StackFrame] {
        &self.frames
    }

    pub fn len(&self) -> usize {
        self.frames.len()
    }

    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    /// Render every frame on its own line, trailing whitespace trimmed
    pub fn render(&self) -> String {
        let lines: Vec<String> = self.frames.iter().map(|frame| frame.to_string()).collect();
        lines.join("\n").trim_end().to_string()
    }
}

impl From<Vec<StackFrame>> for StackTrace {
    fn from(frames: Vec<StackFrame>) -> Self {
        Self::new(frames)
    }
}

impl FromIterator<StackFrame> for StackTrace {
    fn from_iter<I: IntoIterator<Item = StackFrame>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl fmt::Display for StackTrace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn frame(file: Option<&str>, class: Option<&str>, method: Option<&str>) -> StackFrame {
        StackFrame {
            file: file.map(String::from),
            class: class.map(String::from),
            method: method.map(String::from),
            line: 1,
            column: 2,
        }
    }

    #[test]
    fn test_frame_all_fields() {
        let f = frame(Some("File.cs"), Some("ClassName"), Some("MethodName"));
        assert_eq!(f.to_string(), "ClassName.MethodName in File.cs(1,2)");
    }

    #[test]
    fn test_frame_without_file() {
        let f = frame(None, Some("ClassName"), Some("MethodName"));
        assert_eq!(f.to_string(), "ClassName.MethodName in **(1,2)");
    }

    #[test]
    fn test_frame_without_class() {
        let f = frame(Some("File.cs"), None, Some("MethodName"));
        assert_eq!(f.to_string(), "UnknownClass.MethodName in File.cs(1,2)");
    }

    #[test]
    fn test_frame_without_method() {
        // unknown method is also unknown class
        let f = frame(Some("File.cs"), Some("ClassName"), None);
        assert_eq!(f.to_string(), "UnknownClass.UnknownMethod in File.cs(1,2)");
    }

    #[test]
    fn test_frame_builder() {
        let f = StackFrame::new(10, 4)
            .with_file("worker.rs")
            .with_class("Worker")
            .with_method("run");
        assert_eq!(f.to_string(), "Worker.run in worker.rs(10,4)");
    }

    #[test]
    fn test_render_keeps_order() {
        let trace: StackTrace = vec![
            frame(Some("a.rs"), Some("A"), Some("inner")),
            frame(Some("b.rs"), Some("B"), Some("outer")),
        ]
        .into();

        assert_eq!(
            trace.render(),
            "A.inner in a.rs(1,2)\nB.outer in b.rs(1,2)"
        );
    }

    #[test]
    fn test_render_empty() {
        let trace = StackTrace::default();
        assert!(trace.is_empty());
        assert_eq!(trace.render(), "");
    }

    #[test]
    fn test_here_captures_caller() {
        let line = line!() + 1;
        let trace = StackTrace::here();
        assert_eq!(trace.len(), 1);

        let frame = &trace.frames()[0];
        assert_eq!(frame.line, line);
        assert!(frame.file.as_deref().unwrap().ends_with("stack.rs"));
        assert!(frame.method.is_none());
        assert!(trace.render().starts_with("UnknownClass.UnknownMethod in "));
    }

    #[test]
    fn test_caller_frame() {
        let f = StackFrame::caller();
        assert!(f.file.is_some());
        assert!(f.column > 0);
    }
}

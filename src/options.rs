use serde::{Deserialize, Serialize};
use std::path::PathBuf;
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BinaryDetection {
    Simple,
    Accurate,
    None,
}
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TreecatOptions {
    pub root: PathBuf,
    /// `"*"` matches every file; anything else requires the `.ext` suffix.
    pub file_type: String,
    pub recurse: bool,
    /// Extra levels descended below the root. Only read when `recurse` is set.
    pub max_depth: usize,
    pub exclude_types: Vec<String>,
    /// Ordered; negation semantics depend on the order.
    pub exclude_patterns: Vec<String>,
    pub include_binary: bool,
    pub binary_detection: BinaryDetection,
    /// Output file; `None` writes to stdout.
    pub output: Option<PathBuf>,
}
impl Default for TreecatOptions {
    fn default() -> Self {
        Self {
            root: PathBuf::from("."),
            file_type: "*".to_string(),
            recurse: false,
            max_depth: 0,
            exclude_types: Vec::new(),
            exclude_patterns: Vec::new(),
            include_binary: false,
            binary_detection: BinaryDetection::Simple,
            output: None,
        }
    }
}
#[derive(Debug, Default)]
pub struct TreecatBuilder {
    options: TreecatOptions,
}
impl TreecatBuilder {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            options: TreecatOptions {
                root: root.into(),
                ..Default::default()
            },
        }
    }
    pub fn file_type(mut self, ext: impl Into<String>) -> Self {
        self.options.file_type = ext.into();
        self
    }
    pub fn max_depth(mut self, depth: usize) -> Self {
        self.options.recurse = true;
        self.options.max_depth = depth;
        self
    }
    pub fn no_recurse(mut self) -> Self {
        self.options.recurse = false;
        self.options.max_depth = 0;
        self
    }
    pub fn exclude_types(mut self, types: Vec<String>) -> Self {
        self.options.exclude_types = types;
        self
    }
    pub fn exclude_patterns(mut self, patterns: Vec<String>) -> Self {
        self.options.exclude_patterns = patterns;
        self
    }
    pub fn include_binary(mut self, yes: bool) -> Self {
        self.options.include_binary = yes;
        self
    }
    pub fn binary_detection(mut self, method: BinaryDetection) -> Self {
        self.options.binary_detection = method;
        self
    }
    pub fn output(mut self, path: impl Into<PathBuf>) -> Self {
        self.options.output = Some(path.into());
        self
    }
    pub fn build(self) -> TreecatOptions {
        self.options
    }
}

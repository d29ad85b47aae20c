//! Script and style assets a notice can ask the host to enqueue.

/// A script registered with the host asset pipeline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Script {
    pub source: String,
    pub dependencies: Vec<String>,
    /// `None` lets the host pick its own cache-busting version.
    pub version: Option<String>,
    pub in_footer: bool,
    /// Loading strategy such as `defer` or `async`.
    pub strategy: Option<String>,
}

impl Script {
    pub fn new(source: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            dependencies: Vec::new(),
            version: None,
            in_footer: false,
            strategy: None,
        }
    }

    pub fn dependencies<I, S>(mut self, dependencies: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.dependencies = dependencies.into_iter().map(Into::into).collect();
        self
    }

    pub fn version(mut self, version: impl Into<String>) -> Self {
        self.version = Some(version.into());
        self
    }

    pub fn in_footer(mut self, in_footer: bool) -> Self {
        self.in_footer = in_footer;
        self
    }

    pub fn strategy(mut self, strategy: impl Into<String>) -> Self {
        self.strategy = Some(strategy.into());
        self
    }
}

/// A stylesheet registered with the host asset pipeline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Style {
    pub source: String,
    pub dependencies: Vec<String>,
    pub version: Option<String>,
    pub media: String,
}

impl Style {
    pub fn new(source: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            dependencies: Vec::new(),
            version: None,
            media: "all".to_string(),
        }
    }

    pub fn dependencies<I, S>(mut self, dependencies: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.dependencies = dependencies.into_iter().map(Into::into).collect();
        self
    }

    pub fn version(mut self, version: impl Into<String>) -> Self {
        self.version = Some(version.into());
        self
    }

    pub fn media(mut self, media: impl Into<String>) -> Self {
        self.media = media.into();
        self
    }
}

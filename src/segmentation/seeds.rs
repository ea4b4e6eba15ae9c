use super::types::PixelCoord;

/// Outcome of a seed selection
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeedSelection {
    SourceBound(PixelCoord),
    SinkBound(PixelCoord),
    Ignored,
}

/// Foreground (source) and background (sink) exemplar pixels
///
/// Each seed can be bound once; later attempts are ignored. The binding is
/// owned by whoever drives seed selection and is handed to the segmenter by
/// reference.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SeedBinding {
    source: Option<PixelCoord>,
    sink: Option<PixelCoord>,
}

impl SeedBinding {
    pub fn new() -> Self {
        Self::default()
    }

    /// Binding with both seeds set
    pub fn with_seeds(source: PixelCoord, sink: PixelCoord) -> Self {
        Self {
            source: Some(source),
            sink: Some(sink),
        }
    }

    pub fn source(&self) -> Option<PixelCoord> {
        self.source
    }

    pub fn sink(&self) -> Option<PixelCoord> {
        self.sink
    }

    /// Both seeds, if both are bound
    pub fn pair(&self) -> Option<(PixelCoord, PixelCoord)> {
        self.source.zip(self.sink)
    }

    pub fn is_complete(&self) -> bool {
        self.pair().is_some()
    }

    /// Bind the foreground seed; returns false if it was already bound
    pub fn bind_source(&mut self, at: PixelCoord) -> bool {
        Self::bind_once(&mut self.source, at, "source")
    }

    /// Bind the background seed; returns false if it was already bound
    pub fn bind_sink(&mut self, at: PixelCoord) -> bool {
        Self::bind_once(&mut self.sink, at, "sink")
    }

    fn bind_once(slot: &mut Option<PixelCoord>, at: PixelCoord, role: &str) -> bool {
        if let Some(existing) = *slot {
            tracing::warn!(
                "Ignoring {} seed at {}: already bound to {}",
                role,
                at,
                existing
            );
            return false;
        }
        *slot = Some(at);
        tracing::info!("{} seed bound at {}", role, at);
        true
    }

    /// Apply one interactive selection
    ///
    /// The first selection binds the source. After that, only a `confirm`
    /// selection binds the sink. Anything else is ignored.
    pub fn select(&mut self, at: PixelCoord, confirm: bool) -> SeedSelection {
        if self.source.is_none() {
            self.bind_source(at);
            return SeedSelection::SourceBound(at);
        }
        if confirm && self.sink.is_none() {
            self.bind_sink(at);
            return SeedSelection::SinkBound(at);
        }
        tracing::debug!("Selection at {} ignored (confirm={})", at, confirm);
        SeedSelection::Ignored
    }
}

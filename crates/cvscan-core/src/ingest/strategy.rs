use crate::record::Field;

/// One matcher in a cascade, named for logging.
pub struct Stage<'a, I: ?Sized, T> {
    pub name: &'static str,
    matcher: Box<dyn Fn(&I) -> Option<T> + Send + Sync + 'a>,
}

/// Ordered matcher stages for a single field, evaluated in confidence order.
/// The first stage that yields a value wins; later stages never run.
pub struct Cascade<'a, I: ?Sized, T> {
    field: Field,
    stages: Vec<Stage<'a, I, T>>,
}

impl<'a, I: ?Sized, T> Cascade<'a, I, T> {
    #[must_use]
    pub fn new(field: Field) -> Self {
        Self {
            field,
            stages: Vec::new(),
        }
    }

    #[must_use]
    pub fn stage<F>(mut self, name: &'static str, matcher: F) -> Self
    where
        F: Fn(&I) -> Option<T> + Send + Sync + 'a,
    {
        self.stages.push(Stage {
            name,
            matcher: Box::new(matcher),
        });
        self
    }

    pub fn stage_names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.stages.iter().map(|s| s.name)
    }

    pub fn run(&self, input: &I) -> Option<T> {
        for stage in &self.stages {
            if let Some(value) = (stage.matcher)(input) {
                tracing::debug!(field = %self.field, stage = stage.name, "field matched");
                return Some(value);
            }
        }

        tracing::debug!(field = %self.field, "no stage matched");
        None
    }
}

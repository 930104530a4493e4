//! Field walker that collects validation failures.

use super::{FieldError, FieldIssue, ValidationError, ValidationMode};

/// Capability shared by every outbound payload type.
///
/// Implementors describe their fields once in [`validate_fields`]; the
/// mode decides which of those checks actually report.
///
/// [`validate_fields`]: Validate::validate_fields
pub trait Validate {
    /// Walks the fields of `self`, reporting problems to `validator`.
    fn validate_fields(&self, validator: &mut Validator);

    /// Validates `self` under `mode`.
    ///
    /// [`ValidationMode::None`] returns immediately without walking the
    /// payload.
    ///
    /// # Errors
    ///
    /// Returns a [`ValidationError`] listing every offending field.
    fn validate(&self, mode: ValidationMode) -> Result<(), ValidationError> {
        if mode.is_none() {
            return Ok(());
        }

        let mut validator = Validator::new(mode);
        self.validate_fields(&mut validator);
        validator.finish()
    }
}

/// Collects [`FieldError`]s while a payload is walked.
///
/// Tracks the current path so nested records report fully qualified field
/// names such as `billing_address.country_code`.
#[derive(Debug)]
pub struct Validator {
    mode: ValidationMode,
    path: String,
    errors: Vec<FieldError>,
}

impl Validator {
    /// Creates a validator for the given mode.
    #[must_use]
    pub const fn new(mode: ValidationMode) -> Self {
        Self {
            mode,
            path: String::new(),
            errors: Vec::new(),
        }
    }

    /// Returns the active mode.
    #[must_use]
    pub const fn mode(&self) -> ValidationMode {
        self.mode
    }

    /// Checks a field that must be present under [`ValidationMode::All`].
    pub fn required<T: ?Sized>(
        &mut self,
        field: &str,
        value: Option<&T>,
        rule: impl FnOnce(&T) -> Result<(), FieldIssue>,
    ) {
        match value {
            Some(value) => self.apply(field, value, rule),
            None => self.missing(field),
        }
    }

    /// Checks a field only if it is present.
    pub fn optional<T: ?Sized>(
        &mut self,
        field: &str,
        value: Option<&T>,
        rule: impl FnOnce(&T) -> Result<(), FieldIssue>,
    ) {
        if let Some(value) = value {
            self.apply(field, value, rule);
        }
    }

    /// Recurses into a nested record that must be present under `All`.
    pub fn required_nested<T: Validate + ?Sized>(&mut self, field: &str, value: Option<&T>) {
        match value {
            Some(value) => self.nested(field, value),
            None => self.missing(field),
        }
    }

    /// Recurses into a nested record only if it is present.
    pub fn optional_nested<T: Validate + ?Sized>(&mut self, field: &str, value: Option<&T>) {
        if let Some(value) = value {
            self.nested(field, value);
        }
    }

    /// Recurses into every element of a list that must be present and
    /// non-empty under `All`.
    pub fn required_list<T: Validate>(&mut self, field: &str, values: Option<&[T]>) {
        match values {
            Some([]) if self.mode.requires_presence() => self.report(field, FieldIssue::Empty),
            Some(values) => self.list(field, values),
            None => self.missing(field),
        }
    }

    /// Recurses into every element of a list only if it is present.
    pub fn optional_list<T: Validate>(&mut self, field: &str, values: Option<&[T]>) {
        if let Some(values) = values {
            self.list(field, values);
        }
    }

    /// Runs `walk` with `All` lowered to `IgnoreMissing`.
    ///
    /// Used by payloads whose fields are all optional whatever the caller
    /// configured.
    pub fn relaxed(&mut self, walk: impl FnOnce(&mut Self)) {
        let mode = self.mode;
        self.mode = mode.relaxed();
        walk(self);
        self.mode = mode;
    }

    /// Records an issue against `field` under the current path.
    pub fn report(&mut self, field: &str, issue: FieldIssue) {
        let field = self.qualify(field);
        self.errors.push(FieldError { field, issue });
    }

    /// Returns `Ok` if nothing was reported.
    ///
    /// # Errors
    ///
    /// Returns a [`ValidationError`] with every reported field.
    pub fn finish(self) -> Result<(), ValidationError> {
        if self.errors.is_empty() {
            Ok(())
        } else {
            Err(ValidationError::new(self.errors))
        }
    }

    fn apply<T: ?Sized>(
        &mut self,
        field: &str,
        value: &T,
        rule: impl FnOnce(&T) -> Result<(), FieldIssue>,
    ) {
        if let Err(issue) = rule(value) {
            self.report(field, issue);
        }
    }

    fn missing(&mut self, field: &str) {
        if self.mode.requires_presence() {
            self.report(field, FieldIssue::Missing);
        }
    }

    fn nested<T: Validate + ?Sized>(&mut self, segment: &str, value: &T) {
        let restore = self.path.len();
        self.path = self.qualify(segment);
        value.validate_fields(self);
        self.path.truncate(restore);
    }

    fn list<T: Validate>(&mut self, field: &str, values: &[T]) {
        for (index, value) in values.iter().enumerate() {
            self.nested(&format!("{field}[{index}]"), value);
        }
    }

    fn qualify(&self, field: &str) -> String {
        if self.path.is_empty() {
            field.to_string()
        } else {
            format!("{}.{field}", self.path)
        }
    }
}

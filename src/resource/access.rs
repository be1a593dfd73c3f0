use super::*;
use crate::Value;

impl Resource {
    /// Get a typed value using a `tag.field` path.
    ///
    /// # Examples
    /// ```no_run
    /// # use tagres::Resource;
    /// # fn main() -> Result<(), Box<dyn std::error::Error>> {
    /// # let resource = Resource::from_file("scene.tres")?;
    /// let name: String = resource.get("scene.name")?;
    /// let layers: Vec<i64> = resource.get("scene.layers")?;
    /// # Ok(())
    /// # }
    /// ```
    ///
    /// # Errors
    /// Returns an error if the path doesn't resolve or the value can't be
    /// converted to `T`.
    pub fn get<T>(&self, path: &str) -> Result<T, TagresError>
    where
        T: TryFrom<Value, Error = TagresError>,
    {
        let value = self.get_value(path)?;
        T::try_from(value).map_err(|e| enhance_error_with_line_info(e, path, &self.raw_content))
    }

    /// Get an optional typed value: `Ok(None)` if the path doesn't resolve.
    pub fn get_optional<T>(&self, path: &str) -> Result<Option<T>, TagresError>
    where
        T: TryFrom<Value, Error = TagresError>,
    {
        match self.get_value(path) {
            Ok(value) => T::try_from(value)
                .map(Some)
                .map_err(|e| enhance_error_with_line_info(e, path, &self.raw_content)),
            Err(TagresError::TypeError { code: Some(304), .. }) => Ok(None),
            Err(e) => Err(e),
        }
    }

    /// Get a value with a fallback default.
    ///
    /// # Examples
    /// ```no_run
    /// # use tagres::Resource;
    /// # let resource = Resource::from_file("scene.tres").unwrap();
    /// let fps = resource.get_or("settings.fps", 60i64);
    /// let debug = resource.get_or("settings.debug", false);
    /// ```
    pub fn get_or<T>(&self, path: &str, default: T) -> T
    where
        T: TryFrom<Value, Error = TagresError>,
    {
        self.get(path).unwrap_or(default)
    }

    pub fn has(&self, path: &str) -> bool {
        self.get_value(path).is_ok()
    }

    /// Raw field lookup by `tag.field` path.
    ///
    /// Tag identifiers may themselves contain dots, so every split point is
    /// tried from the rightmost dot leftwards and the first combination that
    /// resolves wins: `node.shape.radius` checks tag `node.shape` with field
    /// `radius` before tag `node` with field `shape.radius`.
    pub fn get_value(&self, path: &str) -> Result<Value, TagresError> {
        let splits: Vec<usize> = path.match_indices('.').map(|(i, _)| i).collect();

        for &i in splits.iter().rev() {
            let (tag_id, field_name) = (&path[..i], &path[i + 1..]);
            if let Some(value) = self.file.tag(tag_id).and_then(|t| t.get(field_name)) {
                return Ok(value.clone());
            }
        }

        Err(not_found(path))
    }
}

fn not_found(path: &str) -> TagresError {
    TagresError::TypeError {
        message: format!("Path '{}' not found in resource file", path),
        line: 0,
        column: 0,
        hint: Some("Use 'tag.field' with a tag identifier and a field name".into()),
        code: Some(304),
    }
}

/// Point a conversion error at the line the field was assigned on.
fn enhance_error_with_line_info(e: TagresError, path: &str, raw_content: &str) -> TagresError {
    match e {
        TagresError::TypeError { message, hint, code, .. } => {
            let field = path.rsplit('.').next().unwrap_or(path);
            let line = find_field_line(raw_content, field);
            TagresError::TypeError {
                message,
                line,
                column: 0,
                hint,
                code,
            }
        }
        other => other,
    }
}

/// Best-effort scan for the line a field is assigned on. Returns 0 when the
/// field can't be spotted in the raw text.
fn find_field_line(raw_content: &str, field: &str) -> usize {
    for (i, line) in raw_content.lines().enumerate() {
        let trimmed = line.trim_start();
        if let Some(rest) = trimmed.strip_prefix(field) {
            if rest.trim_start().starts_with('=') {
                return i + 1;
            }
        }
    }
    0
}

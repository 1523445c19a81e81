use crate::RouteDeclarationError;

/// One `/`-delimited piece of a route template.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum PathSegment {
    /// Matches exactly this literal, case-sensitively.
    Static(String),
    /// Matches any non-empty segment and captures it under this name.
    Dynamic(String),
}

impl PathSegment {
    /// The literal, or the parameter name for a dynamic segment.
    pub fn as_raw_str(&self) -> &str {
        match self {
            PathSegment::Static(i) => i,
            PathSegment::Dynamic(i) => i,
        }
    }

    pub fn is_dynamic(&self) -> bool {
        matches!(self, PathSegment::Dynamic(_))
    }

    /// Tests one concrete segment against this template segment.
    #[inline]
    pub fn accepts(&self, concrete: &str) -> bool {
        match self {
            PathSegment::Static(literal) => literal == concrete,
            PathSegment::Dynamic(_) => !concrete.is_empty(),
        }
    }

    /// Writes this segment back in template syntax.
    pub fn to_template(&self) -> String {
        match self {
            PathSegment::Static(literal) => literal.clone(),
            PathSegment::Dynamic(name) => format!("<{name}>"),
        }
    }
}

/// Classifies a single template segment.
///
/// `<name>` becomes [`PathSegment::Dynamic`]; anything else without angle
/// brackets becomes [`PathSegment::Static`]. A segment that uses `<` or `>`
/// in any other way, including `<>`, is rejected. `template` is only used to
/// give the error some context.
///
/// Segments must already be non-empty; callers split with
/// [`split_path`](crate::split_path), which never yields empty pieces.
pub fn parse_segment(
    template: &str,
    segment: &str,
) -> Result<PathSegment, RouteDeclarationError> {
    debug_assert!(!segment.is_empty(), "empty segments are never classified");

    if !segment.contains(['<', '>']) {
        return Ok(PathSegment::Static(segment.to_string()));
    }

    let name = segment
        .strip_prefix('<')
        .and_then(|rest| rest.strip_suffix('>'))
        .filter(|name| !name.is_empty() && !name.contains(['<', '>', '/']));

    match name {
        Some(name) => Ok(PathSegment::Dynamic(name.to_string())),
        None => Err(RouteDeclarationError::MalformedSegment {
            template: template.to_string(),
            segment: segment.to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::{parse_segment, PathSegment};
    use crate::RouteDeclarationError;

    #[test]
    fn classifies_static_segments() {
        assert_eq!(
            parse_segment("/users", "users"),
            Ok(PathSegment::Static("users".into()))
        );
        assert_eq!(
            parse_segment("/a:b", "a:b"),
            Ok(PathSegment::Static("a:b".into()))
        );
    }

    #[test]
    fn classifies_dynamic_segments() {
        assert_eq!(
            parse_segment("/users/<user_id>", "<user_id>"),
            Ok(PathSegment::Dynamic("user_id".into()))
        );
        assert_eq!(
            parse_segment("/<x>", "<x>"),
            Ok(PathSegment::Dynamic("x".into()))
        );
    }

    #[test]
    fn rejects_malformed_dynamic_syntax() {
        for bad in ["<id", "id>", "<>", "<<id>>", "a<id>", "<id>b", "<i<d>"] {
            assert!(
                matches!(
                    parse_segment("/t", bad),
                    Err(RouteDeclarationError::MalformedSegment { .. })
                ),
                "{bad:?} should be rejected"
            );
        }
    }

    #[test]
    fn dynamic_accepts_anything_non_empty() {
        let seg = PathSegment::Dynamic("id".into());
        assert!(seg.accepts("42"));
        assert!(seg.accepts("<id>"));
        assert!(!seg.accepts(""));
    }

    #[test]
    fn static_is_case_sensitive() {
        let seg = PathSegment::Static("Users".into());
        assert!(seg.accepts("Users"));
        assert!(!seg.accepts("users"));
    }

    #[test]
    fn template_round_trip() {
        assert_eq!(PathSegment::Dynamic("id".into()).to_template(), "<id>");
        assert_eq!(PathSegment::Static("id".into()).to_template(), "id");
    }
}

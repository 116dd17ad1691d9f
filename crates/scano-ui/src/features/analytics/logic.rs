//! Analytics aggregate kinds and endpoint paths.

/// Server-computed aggregates the analytics view can render.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AggregateKind {
    /// Sentiment mix over matched materials.
    Sentiment,
    /// Source channel class mix.
    SourceKinds,
    /// Author age bands.
    AuthorAge,
    /// Author gender split.
    AuthorGender,
    /// Country distribution.
    Countries,
    /// Tag distribution.
    Tags,
}

impl AggregateKind {
    /// All aggregates in display order.
    #[must_use]
    pub const fn all() -> [Self; 6] {
        [
            Self::Sentiment,
            Self::SourceKinds,
            Self::AuthorAge,
            Self::AuthorGender,
            Self::Countries,
            Self::Tags,
        ]
    }

    /// Endpoint path for the aggregate under a theme.
    #[must_use]
    pub fn path(self, theme_id: &str) -> String {
        format!("/v1/themes/{theme_id}/analytics/{}", self.segment())
    }

    /// Trailing path segment / translation key suffix.
    #[must_use]
    pub const fn segment(self) -> &'static str {
        match self {
            Self::Sentiment => "sentiment",
            Self::SourceKinds => "source_kinds",
            Self::AuthorAge => "authors_age",
            Self::AuthorGender => "authors_gender",
            Self::Countries => "countries",
            Self::Tags => "tags",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::AggregateKind;

    #[test]
    fn paths_are_theme_scoped() {
        assert_eq!(
            AggregateKind::AuthorAge.path("64f1c2"),
            "/v1/themes/64f1c2/analytics/authors_age"
        );
        let segments: Vec<&str> = AggregateKind::all()
            .iter()
            .map(|kind| kind.segment())
            .collect();
        let mut deduped = segments.clone();
        deduped.dedup();
        assert_eq!(segments, deduped, "segments are distinct");
    }
}

use crate::kind::IdentifierKind;
use metrics::{IntoLabels, Label, SharedString};

/// Holder of multiple [Label] attached to the validation metrics.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Labels(Vec<Label>);

pub const IDENTIFIER_KIND: &str = "identifier_kind";

impl Labels {
    pub fn new(
        labels: &[(
            impl Into<SharedString> + Clone,
            impl Into<SharedString> + Clone,
        )],
    ) -> Self {
        Labels(labels.iter().map(Label::from).collect())
    }

    pub fn for_kind(kind: IdentifierKind) -> Self {
        Labels::new(&[(IDENTIFIER_KIND, kind.as_ref().to_string())])
    }
}

impl IntoLabels for Labels {
    fn into_labels(self) -> Vec<Label> {
        self.0
    }
}

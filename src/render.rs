use crate::model::Checklist;

/// Renders the checklist with 1-based numbering, one `N. [mark] name` line
/// per item. An empty checklist renders an explicit message instead.
#[must_use]
pub fn render(checklist: &Checklist) -> String {
    if checklist.is_empty() {
        return "Checklist is empty.".to_string();
    }

    checklist
        .items()
        .iter()
        .enumerate()
        .map(|(index, item)| format!("{}. [{}] {}", index + 1, item.priority.mark(), item.name))
        .collect::<Vec<_>>()
        .join("\n")
}

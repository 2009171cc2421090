use crate::query::state::QueryState;

/// Query-input collaborator, read on demand rather than pushed.
pub trait QueryInput {
    /// Current comma-separated keyword text, exactly as typed.
    fn keyword_text(&self) -> String;
    /// Currently selected sort field name.
    fn sort_field(&self) -> String;
}

/// Builds a fresh `Idle(0)` state from the current input values.
pub fn read_query_state(input: &dyn QueryInput) -> QueryState {
    QueryState::from_input(&input.keyword_text(), input.sort_field())
}

#[cfg(test)]
mod tests {
    use super::{read_query_state, QueryInput};
    use crate::query::state::PageCursor;

    struct FixedInput;

    impl QueryInput for FixedInput {
        fn keyword_text(&self) -> String {
            " Ladybug, ,HONEYBEE".to_string()
        }

        fn sort_field(&self) -> String {
            "created_at".to_string()
        }
    }

    #[test]
    fn read_query_state_parses_keyword_text() {
        let state = read_query_state(&FixedInput);
        assert_eq!(state.keywords(), ["ladybug".to_string(), "honeybee".to_string()]);
        assert_eq!(state.sort_field(), "created_at");
        assert_eq!(state.cursor(), PageCursor::Idle(0));
    }
}

mod search_state;

pub use search_state::{
    SEARCH_LABEL, SEARCHING_LABEL, SearchControl, SearchOutcome, SearchPhase,
};

use super::*;

mod require_search;

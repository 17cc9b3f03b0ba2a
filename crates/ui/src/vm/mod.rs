mod question_vm;
mod results_vm;
mod test_vm;
mod time_fmt;

pub use question_vm::{
    OptionGroupVm, OptionMark, OptionVm, QuestionVm, map_question, visible_image,
};
pub use results_vm::{
    NOT_ANSWERED_MARKER, ResultsVm, ReviewEntryVm, ReviewValueVm, map_results, map_review_entries,
};
pub use test_vm::{NavButtonVm, NavigationVm, TestHeaderVm, map_navigation, map_test_header};
pub use time_fmt::{format_elapsed, format_timer};

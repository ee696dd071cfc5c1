// Resume-to-job matching.
// Pure scoring: no network, no LLM. Upstream collaborators hand over structured
// resumes and job postings; the presenter narrates the returned report.

pub mod handlers;
pub mod models;
pub mod normalize;
pub mod scorer;
pub mod visualize;
pub mod weights;

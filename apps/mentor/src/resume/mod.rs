// Resume Section Extractor: PDF text -> normalized, labeled sections.
// Pure and synchronous except for the PDF collaborator in `pdf`.

pub mod normalize;
pub mod parser;
pub mod pdf;
pub mod sections;
pub mod skills;

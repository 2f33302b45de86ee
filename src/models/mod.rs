pub mod disorder;
pub mod loaders;
pub mod sequence;

pub use disorder::{DisorderResult, DropReason, RecordOutcome, ResultHandle};
pub use loaders::{load_fasta_file, FastaReader};
pub use sequence::SequenceRecord;

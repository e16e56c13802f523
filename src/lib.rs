pub mod context;
pub mod lang;
pub mod process;
pub mod profile;
pub mod router;
pub mod stage;
pub mod table;
#[doc(hidden)]
pub mod testing;
pub mod translator;
pub mod unicode;

pub use context::Context;
pub use lang::{HIN, Lang, PAN_ARAB, PAN_GURU, SND_ARAB, SND_DEVA, Script, URD};
pub use process::Pipeline;
pub use profile::{Hindustani, IndoArabicEngine, Profile, ProfileConfig, ProfileError, Punjabi, Sindhi};
pub use router::{Backend, BackendError, RouterError, ScriptRouter, ScriptRouterBuilder, convert};
pub use stage::{Stage, StageError};
pub use table::{MappingTable, Role, TableError};
pub use translator::{Direction, MatchMode, Translator};

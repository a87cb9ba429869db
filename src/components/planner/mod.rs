pub mod forms;
pub mod models;
pub mod navigation;
pub mod output;
pub mod table;

pub use forms::{CommitmentForm, PreferencesForm, TaskForm};
pub use models::{Commitment, Preferences, Task, TimeSlot};
pub use navigation::Page;
pub use table::{Table, TableRow};

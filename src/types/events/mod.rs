mod dismissal_record;
pub use dismissal_record::*;

mod event;
pub use event::*;

mod localized_event;
pub use localized_event::*;

mod schedule_item;
pub use schedule_item::*;

mod upcoming_event;
pub use upcoming_event::*;

pub mod clock;
pub mod delivery;
mod poller;
mod store;

pub use clock::{Clock, SystemClock};
pub use delivery::ReminderDeliveryChannel;
pub use poller::{ReminderPoller, deliver_due};
pub use store::ReminderStore;

#[cfg(any(test, feature = "test-util"))]
pub use clock::ManualClock;

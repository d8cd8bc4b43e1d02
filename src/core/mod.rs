pub mod constants;
pub mod contact;
pub mod counter;
pub mod cursor;
pub mod filter;
pub mod hover;
pub mod nav;
pub mod payment;
pub mod preloader;
pub mod reveal;
pub mod scroll;
pub mod typing;

pub use contact::{ContactError, ContactFields, ContactForm, FormPhase};
pub use counter::{CounterAnimation, CounterFrame};
pub use cursor::CursorFollower;
pub use filter::{FilterError, FilterState, ProjectFilter};
pub use nav::MenuState;
pub use payment::{DownloadTarget, ModalState, PaymentError, PaymentModal, SessionId};
pub use preloader::Preloader;
pub use reveal::RevealKind;
pub use scroll::{FrameThrottle, ScrollInput, ScrollMetrics, ScrollUpdate, SectionBounds, TimelineRect};
pub use typing::{TypingPhase, Typewriter};

pub mod breed_card;
pub mod breed_list;
pub mod carousel;
pub mod fact_list;
pub mod like_button;
pub mod pane_tabs;
pub mod toast;

pub use breed_card::BreedCard;
pub use breed_list::BreedList;
pub use carousel::Carousel;
pub use fact_list::FactList;
pub use like_button::LikeButton;
pub use pane_tabs::PaneTabs;
pub use toast::LikeToast;

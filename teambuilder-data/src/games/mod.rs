mod availability;
mod exclusivity;
mod game_data;

pub use availability::Availability;
pub use exclusivity::{
    ExclusivityGroup,
    ExclusivityGroupMember,
    GroupId,
};
pub use game_data::{
    GameData,
    GameId,
};

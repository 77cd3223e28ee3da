pub mod clubs;
pub mod competitions;
pub mod games;
pub mod players;
pub mod registration_mappings;
pub mod roster_entries;
pub mod teams;

pub use clubs::Entity as Clubs;
pub use clubs::Model as Club;
pub use competitions::Entity as Competitions;
pub use competitions::Model as Competition;
pub use games::Entity as Games;
pub use games::Model as Game;
pub use players::Entity as Players;
pub use players::Model as Player;
pub use registration_mappings::Entity as RegistrationMappings;
pub use registration_mappings::Model as RegistrationMapping;
pub use roster_entries::Entity as RosterEntries;
pub use roster_entries::Model as RosterEntry;
pub use teams::Entity as Teams;
pub use teams::Model as Team;

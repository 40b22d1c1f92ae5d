use rapier2d::prelude::*;

/// Collision groups for filtering what objects can collide with each other
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CollisionGroups {
    /// Default group - interacts with everything
    Default = 0b0000_0001,

    /// Player characters
    Player = 0b0000_0010,

    /// Static platforms, ground and world bounds
    Platform = 0b0000_0100,
}

impl CollisionGroups {
    /// Convert to rapier2d's InteractionGroups
    pub fn to_interaction_groups(self) -> InteractionGroups {
        let memberships = Group::from_bits_truncate(self as u32);

        let filter = match self {
            // Players only stand on level geometry
            CollisionGroups::Player => Group::from_bits_truncate(
                CollisionGroups::Platform as u32 | CollisionGroups::Default as u32,
            ),

            CollisionGroups::Platform => Group::from_bits_truncate(
                CollisionGroups::Player as u32 | CollisionGroups::Default as u32,
            ),

            CollisionGroups::Default => Group::ALL,
        };

        InteractionGroups::new(memberships, filter)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_collision_groups_bits() {
        let groups = [
            CollisionGroups::Default,
            CollisionGroups::Player,
            CollisionGroups::Platform,
        ];

        for (i, group1) in groups.iter().enumerate() {
            for (j, group2) in groups.iter().enumerate() {
                if i != j {
                    assert_ne!(
                        *group1 as u32, *group2 as u32,
                        "Groups must have unique bits"
                    );
                }
            }
        }
    }

    #[test]
    fn test_player_doesnt_collide_with_player() {
        let player_groups = CollisionGroups::Player.to_interaction_groups();
        assert!(
            !player_groups.filter.contains(player_groups.memberships),
            "Players should not collide with other players"
        );
    }

    #[test]
    fn test_player_collides_with_platform() {
        let player = CollisionGroups::Player.to_interaction_groups();
        let platform = CollisionGroups::Platform.to_interaction_groups();

        assert!(player.filter.contains(platform.memberships));
        assert!(platform.filter.contains(player.memberships));
    }
}

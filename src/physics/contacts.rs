use bevy::prelude::*;
use bevy_rapier2d::prelude::*;

use super::categories::CollisionCategory;

/// Gameplay-level contact involving the ball, derived from Rapier collision events.
#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub enum BallContact {
    Block(Entity),
    Bottom,
    Paddle,
}

/// Orders a pair of memberships so the ball comes first. `None` when neither
/// side is a ball or the other side has no single category (boundary walls).
pub fn classify(a: u32, b: u32) -> Option<(CollisionCategory, CollisionCategory)> {
    let ca = CollisionCategory::from_bits(a)?;
    let cb = CollisionCategory::from_bits(b)?;
    match (ca, cb) {
        (CollisionCategory::Ball, other) | (other, CollisionCategory::Ball) => {
            Some((CollisionCategory::Ball, other))
        }
        _ => None,
    }
}

pub fn emit_ball_contacts(
    mut collisions: EventReader<CollisionEvent>,
    groups: Query<&CollisionGroups>,
    mut contacts: EventWriter<BallContact>,
) {
    for ev in collisions.read() {
        let CollisionEvent::Started(e1, e2, _flags) = ev else { continue };
        let (Ok(g1), Ok(g2)) = (groups.get(*e1), groups.get(*e2)) else { continue };
        let Some((_, other)) = classify(g1.memberships.bits(), g2.memberships.bits()) else { continue };
        let contact = match other {
            CollisionCategory::Block => {
                let block = if CollisionCategory::from_bits(g1.memberships.bits()) == Some(CollisionCategory::Block) { *e1 } else { *e2 };
                BallContact::Block(block)
            }
            CollisionCategory::Bottom => BallContact::Bottom,
            CollisionCategory::Paddle => BallContact::Paddle,
            // ball-ball never happens with a single ball in play
            CollisionCategory::Ball => continue,
        };
        debug!(target: "contacts", "{:?} <-> {:?}: {:?}", e1, e2, contact);
        contacts.write(contact);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bevy_rapier2d::rapier::geometry::CollisionEventFlags;
    use crate::physics::categories::{groups_for, BALL_CATEGORY, BLOCK_CATEGORY, BOTTOM_CATEGORY, PADDLE_CATEGORY};

    #[test]
    fn classify_puts_ball_first() {
        assert_eq!(
            classify(BLOCK_CATEGORY, BALL_CATEGORY),
            Some((CollisionCategory::Ball, CollisionCategory::Block))
        );
        assert_eq!(
            classify(BALL_CATEGORY, BOTTOM_CATEGORY),
            Some((CollisionCategory::Ball, CollisionCategory::Bottom))
        );
    }

    #[test]
    fn classify_ignores_walls_and_non_ball_pairs() {
        assert_eq!(classify(BALL_CATEGORY, u32::MAX), None);
        assert_eq!(classify(BLOCK_CATEGORY, PADDLE_CATEGORY), None);
    }

    #[test]
    fn collision_events_become_ball_contacts() {
        let mut app = App::new();
        app.add_event::<CollisionEvent>()
            .add_event::<BallContact>()
            .add_systems(Update, emit_ball_contacts);

        let ball = app.world_mut().spawn(groups_for(CollisionCategory::Ball)).id();
        let block = app.world_mut().spawn(groups_for(CollisionCategory::Block)).id();
        let bottom = app.world_mut().spawn(groups_for(CollisionCategory::Bottom)).id();
        let wall = app.world_mut().spawn(CollisionGroups::new(Group::ALL, Group::ALL)).id();

        app.world_mut().send_event(CollisionEvent::Started(block, ball, CollisionEventFlags::empty()));
        app.world_mut().send_event(CollisionEvent::Started(ball, bottom, CollisionEventFlags::SENSOR));
        app.world_mut().send_event(CollisionEvent::Started(ball, wall, CollisionEventFlags::empty()));
        app.world_mut().send_event(CollisionEvent::Stopped(ball, block, CollisionEventFlags::empty()));
        app.update();

        let events = app.world().resource::<Events<BallContact>>();
        let mut cursor = events.get_cursor();
        let seen: Vec<BallContact> = cursor.read(events).copied().collect();
        assert_eq!(seen, vec![BallContact::Block(block), BallContact::Bottom]);
    }
}

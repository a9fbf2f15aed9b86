//! End-to-end walks through the creation wizard.

use rz_cards::{Card, CardId, HAND_SIZE, Suit};
use rz_core::Resonance;
use rz_creation::{
    Category, CreationConfig, CreationError, CreationSession, PoolKind, Step,
};

fn new_session(seed: u64) -> CreationSession {
    let mut session = CreationSession::new("Vess", CreationConfig::default().with_seed(seed));
    session.set_concept("Haunted archivist");
    session.set_background("Undercity stacks");
    session.set_motivation("Trace the first echo");
    session
}

/// One card of each standard suit, first found in the pool.
fn one_per_suit(session: &CreationSession) -> Vec<CardId> {
    Suit::standard()
        .iter()
        .map(|suit| {
            session
                .remaining_pool()
                .iter()
                .find(|c| c.suit == *suit)
                .map(|c| c.id.clone())
                .expect("hand covers every standard suit")
        })
        .collect()
}

#[test]
fn drawn_hand_covers_suits_and_attributes_fill_up() {
    let mut session = new_session(11);
    session.advance().unwrap();
    session.advance().unwrap();
    assert_eq!(session.current_step(), Step::CardAllocation);

    let pool = session.draw_hand().unwrap();
    assert_eq!(pool.len(), HAND_SIZE);

    // Allocate one card of each standard suit to attributes.
    let picks = one_per_suit(&session);
    assert_eq!(picks.len(), 4);
    for id in &picks {
        session.allocate(id, Category::Attributes).unwrap();
    }
    assert!(!session.is_fully_allocated());
    assert_eq!(session.remaining_pool().len(), 6);

    // A fifth attribute card is refused on capacity and nothing moves.
    let fifth = session.remaining_pool()[0].id.clone();
    let err = session.allocate(&fifth, Category::Attributes).unwrap_err();
    assert!(matches!(
        err,
        CreationError::CategoryFull { category: Category::Attributes, capacity: 4 }
    ));
    assert_eq!(session.category_counts()[&Category::Attributes], 4);
    assert_eq!(session.remaining_pool().len(), 6);
}

#[test]
fn full_allocation_unlocks_the_step_and_the_wizard_finishes() {
    let mut session = new_session(23);
    session.advance().unwrap();
    session.advance().unwrap();
    session.draw_hand().unwrap();

    for id in one_per_suit(&session) {
        session.allocate(&id, Category::Attributes).unwrap();
    }

    // Exactly 2+1+2+1 for the remaining categories.
    let rest: Vec<CardId> = session
        .remaining_pool()
        .iter()
        .map(|c| c.id.clone())
        .collect();
    assert_eq!(rest.len(), 6);
    let targets = [
        Category::Skills,
        Category::Skills,
        Category::Resonances,
        Category::Gear,
        Category::Gear,
        Category::Fate,
    ];
    for (id, category) in rest.iter().zip(targets) {
        session.allocate(id, category).unwrap();
    }

    assert!(session.is_fully_allocated());
    assert_eq!(session.advance().unwrap(), Step::AttributesDisplay);
    assert!(!session.character().attributes.any_unset());
    assert_eq!(session.advance().unwrap(), Step::SkillAllocation);

    // Spend everything the cards funded.
    let skill_points = session.points_remaining(PoolKind::Skill);
    session.set_skill_rank("Investigation", skill_points).unwrap();
    assert_eq!(session.advance().unwrap(), Step::ResonanceAllocation);

    session.awaken_resonance(Resonance::EchoOfPossibility);
    assert_eq!(session.advance().unwrap(), Step::GearAllocation);

    let gear_points = session.points_remaining(PoolKind::Gear);
    session
        .add_gear("Expedition kit", "Rope, chalk, cold lights", gear_points)
        .unwrap();
    assert_eq!(session.advance().unwrap(), Step::FateCardDisplay);
    assert!(session.fate_card().is_some());

    assert_eq!(session.advance().unwrap(), Step::Complete);
    assert!(!session.in_progress());

    let character = session.into_character().unwrap();
    assert_eq!(character.skills.rank("Investigation"), skill_points);
    assert!(character.resonances.is_awakened(Resonance::EchoOfPossibility));
    assert_eq!(character.gear.total_cost(), gear_points);
    assert_eq!(character.vitals.health.current, 10);
}

#[test]
fn conservation_holds_across_a_messy_allocation() {
    let mut session = new_session(31);
    session.advance().unwrap();
    session.advance().unwrap();
    session.draw_hand().unwrap();

    let ids: Vec<CardId> = session
        .remaining_pool()
        .iter()
        .map(|c| c.id.clone())
        .collect();

    let check = |session: &CreationSession| {
        let allocated: usize = session.category_counts().values().sum();
        assert_eq!(session.remaining_pool().len() + allocated, HAND_SIZE);
    };

    for (i, id) in ids.iter().enumerate() {
        let _ = session.reallocate(id, Category::all()[i % Category::all().len()]);
        check(&session);
    }
    for id in ids.iter().take(4) {
        let _ = session.release(id);
        check(&session);
    }
    for id in &ids {
        let _ = session.reallocate(id, Category::Gear);
        check(&session);
    }
}

#[test]
fn reallocation_failure_keeps_the_old_spot() {
    let mut session = new_session(47);
    session.advance().unwrap();
    session.advance().unwrap();
    session.draw_hand().unwrap();

    // Two cards of the same standard suit, if the hand has them.
    let pool: Vec<Card> = session.remaining_pool().to_vec();
    let pair = Suit::standard().iter().find_map(|suit| {
        let of_suit: Vec<&Card> = pool.iter().filter(|c| c.suit == *suit).collect();
        (of_suit.len() >= 2).then(|| (of_suit[0].id.clone(), of_suit[1].id.clone()))
    });
    let Some((first, second)) = pair else {
        // Only three wild cards exist, so at least seven of the ten cards
        // are standard-suited and some suit must repeat.
        panic!("hand unexpectedly has no repeated standard suit");
    };

    session.allocate(&first, Category::Attributes).unwrap();
    session.allocate(&second, Category::Skills).unwrap();

    let err = session.reallocate(&second, Category::Attributes).unwrap_err();
    assert!(matches!(err, CreationError::DuplicateSuit(_)));
    assert_eq!(session.category_of(&second), Some(Category::Skills));
}

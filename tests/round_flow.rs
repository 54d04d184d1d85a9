//! Drives whole rounds headlessly: contacts are fed in directly, no physics step.
use bevy::prelude::*;
use bevy::state::app::StatesPlugin;
use std::path::PathBuf;

use breakout::app::flow::RoundFlowPlugin;
use breakout::app::results::{DefeatBanner, ResultsScenePlugin, ResultsSceneRoot, VictoryBanner};
use breakout::app::state::{AppState, GameOutcome, RoundOutcome};
use breakout::core::components::{Ball, Block, Paddle};
use breakout::core::config::{GameConfig, Tunables};
use breakout::gameplay::round::RoundState;
use breakout::gameplay::GameplayPlugin;
use breakout::interaction::input::{InputActionsPlugin, InputConfigPath};
use breakout::physics::contacts::BallContact;

fn count_with<T: Component>(app: &mut App) -> usize {
    let world = app.world_mut();
    world.query_filtered::<Entity, With<T>>().iter(world).count()
}

fn state(app: &App) -> AppState {
    *app.world().resource::<State<AppState>>().get()
}

fn round_app(tunables: Tunables) -> App {
    let mut cfg = GameConfig::default();
    cfg.tunables = tunables;
    let mut app = App::new();
    app.add_plugins((MinimalPlugins, StatesPlugin))
        .insert_resource(tunables)
        .insert_resource(cfg)
        .insert_resource(ButtonInput::<KeyCode>::default())
        .insert_resource(InputConfigPath(PathBuf::from("target/no-such-input.toml")))
        .init_state::<AppState>()
        .add_plugins((InputActionsPlugin, GameplayPlugin, RoundFlowPlugin, ResultsScenePlugin));
    app.update();
    app
}

#[test]
fn round_starts_with_full_wall_of_bricks() {
    let mut app = round_app(Tunables::default());
    assert_eq!(state(&app), AppState::Playing);
    assert_eq!(count_with::<Block>(&mut app), 72);
    assert_eq!(count_with::<Ball>(&mut app), 1);
    assert_eq!(count_with::<Paddle>(&mut app), 1);
    let round = app.world().resource::<RoundState>();
    assert_eq!(round.lives, 3);
    assert_eq!(round.blocks_remaining, 72);
}

#[test]
fn losing_every_ball_shows_defeat_then_restarts() {
    let mut app = round_app(Tunables::default());

    for _ in 0..3 {
        app.world_mut().send_event(BallContact::Bottom);
    }
    app.update();
    app.update();

    assert_eq!(state(&app), AppState::GameOver);
    assert_eq!(app.world().resource::<RoundOutcome>().0, GameOutcome::Lost);
    assert_eq!(count_with::<ResultsSceneRoot>(&mut app), 1);
    assert_eq!(count_with::<DefeatBanner>(&mut app), 1);
    assert_eq!(count_with::<VictoryBanner>(&mut app), 0);
    assert_eq!(count_with::<Block>(&mut app), 0);
    assert_eq!(count_with::<Ball>(&mut app), 0);

    app.world_mut().resource_mut::<ButtonInput<KeyCode>>().press(KeyCode::Space);
    app.update();
    app.update();

    assert_eq!(state(&app), AppState::Playing);
    assert!(app.world().get_resource::<RoundOutcome>().is_none());
    assert_eq!(count_with::<ResultsSceneRoot>(&mut app), 0);
    assert_eq!(count_with::<Block>(&mut app), 72);
    assert_eq!(app.world().resource::<RoundState>().lives, 3);
}

#[test]
fn losing_one_ball_keeps_playing() {
    let mut app = round_app(Tunables::default());
    app.world_mut().send_event(BallContact::Bottom);
    app.update();
    app.update();

    assert_eq!(state(&app), AppState::Playing);
    assert_eq!(app.world().resource::<RoundState>().lives, 2);
    assert_eq!(count_with::<Ball>(&mut app), 1);
}

#[test]
fn clearing_every_block_shows_victory() {
    let tunables = Tunables { brick_count: 2, brick_rows: 1, ..Tunables::default() };
    let mut app = round_app(tunables);

    let blocks: Vec<Entity> = {
        let world = app.world_mut();
        world.query_filtered::<Entity, With<Block>>().iter(world).collect()
    };
    assert_eq!(blocks.len(), 2);

    // a brick reported twice in one frame counts once
    app.world_mut().send_event(BallContact::Block(blocks[0]));
    app.world_mut().send_event(BallContact::Block(blocks[0]));
    app.update();
    assert_eq!(state(&app), AppState::Playing);
    assert_eq!(app.world().resource::<RoundState>().blocks_remaining, 1);
    assert_eq!(count_with::<Block>(&mut app), 1);

    app.world_mut().send_event(BallContact::Block(blocks[1]));
    app.update();
    app.update();

    assert_eq!(state(&app), AppState::GameOver);
    assert_eq!(app.world().resource::<RoundOutcome>().0, GameOutcome::Won);
    assert_eq!(count_with::<VictoryBanner>(&mut app), 1);
    assert_eq!(count_with::<DefeatBanner>(&mut app), 0);
}

#[test]
fn empty_brick_layout_is_an_immediate_win() {
    let tunables = Tunables { brick_count: 0, ..Tunables::default() };
    let mut app = round_app(tunables);
    app.update();

    assert_eq!(state(&app), AppState::GameOver);
    assert_eq!(app.world().resource::<RoundOutcome>().0, GameOutcome::Won);
    assert_eq!(count_with::<VictoryBanner>(&mut app), 1);
}

//! Flame Protector - keep the fire alive by feeding it your files.
//!
//! Bevy frontend for `flame-sim-core`. The simulation runs on the 60 Hz
//! `FixedUpdate` schedule against its own millisecond clock; per frame the
//! pending window events (file drops, the reset key, quit) are drained in
//! arrival order, then ember sprites and the two HUD text blocks are synced
//! from simulation state. Audio is fire-and-forget: a looping flame track
//! plus a one-shot gain sound whenever fuel is accepted.

use bevy::prelude::*;
use bevy::window::FileDragAndDrop;
use flame_sim_core::config::{SCREEN_HEIGHT, SCREEN_WIDTH, TICK_RATE_HZ};
use flame_sim_core::{temperature_to_color, FlameSimulation, FsProbe, FuelError, Rgb};

const HUD_FONT_SIZE: f32 = 18.0;
const HUD_MARGIN_PX: f32 = 10.0;

fn main() {
    App::new()
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                title: "Flame Protector".to_string(),
                resolution: (SCREEN_WIDTH, SCREEN_HEIGHT).into(),
                resizable: false,
                ..default()
            }),
            ..default()
        }))
        .insert_resource(ClearColor(Color::BLACK))
        .insert_resource(Time::<Fixed>::from_hz(TICK_RATE_HZ))
        .init_resource::<Game>()
        .add_systems(Startup, setup)
        .add_systems(FixedUpdate, advance_simulation)
        .add_systems(
            Update,
            (
                handle_file_drops,
                handle_reset_key,
                sync_ember_sprites,
                update_hud,
            )
                .chain(),
        )
        .run();
}

/// The simulation plus the game clock that drives it.
///
/// The clock accumulates microseconds: at 60 Hz a tick is 16.67 ms, and
/// truncating each delta to whole milliseconds would lose ~4% of game time.
#[derive(Resource)]
struct Game {
    sim: FlameSimulation,
    clock_us: u64,
}

impl Game {
    fn now_ms(&self) -> u64 {
        self.clock_us / 1000
    }
}

impl Default for Game {
    fn default() -> Self {
        Game {
            sim: FlameSimulation::new(0),
            clock_us: 0,
        }
    }
}

/// One-shot sound played when the flame accepts fuel.
#[derive(Resource)]
struct GainSound(Handle<AudioSource>);

// Marker components for the frame-synced entities
#[derive(Component)]
struct EmberSprite;

#[derive(Component)]
struct StatusText;

#[derive(Component)]
struct ScoreText;

fn setup(mut commands: Commands, asset_server: Res<AssetServer>) {
    commands.spawn(Camera2dBundle::default());

    // Temperature + tip, top-left, tinted by the flame color each frame
    commands.spawn((
        TextBundle::from_section(
            "",
            TextStyle {
                font_size: HUD_FONT_SIZE,
                color: Color::WHITE,
                ..default()
            },
        )
        .with_style(Style {
            position_type: PositionType::Absolute,
            top: Val::Px(HUD_MARGIN_PX),
            left: Val::Px(HUD_MARGIN_PX),
            ..default()
        }),
        StatusText,
    ));

    // Score + best score, top-right
    commands.spawn((
        TextBundle::from_section(
            "",
            TextStyle {
                font_size: HUD_FONT_SIZE,
                color: Color::WHITE,
                ..default()
            },
        )
        .with_text_justify(JustifyText::Right)
        .with_style(Style {
            position_type: PositionType::Absolute,
            top: Val::Px(HUD_MARGIN_PX),
            right: Val::Px(HUD_MARGIN_PX),
            ..default()
        }),
        ScoreText,
    ));

    // Background crackle; loops for the lifetime of the process
    commands.spawn(AudioBundle {
        source: asset_server.load("audio/flame.ogg"),
        settings: PlaybackSettings::LOOP,
    });
    commands.insert_resource(GainSound(asset_server.load("audio/gain.ogg")));

    info!("Drop files onto the window to feed the flame.");
}

fn advance_simulation(time: Res<Time>, mut game: ResMut<Game>) {
    game.clock_us += u64::try_from(time.delta().as_micros()).unwrap_or(0);
    let now_ms = game.now_ms();
    game.sim.update(now_ms);
}

fn handle_file_drops(
    mut events: EventReader<FileDragAndDrop>,
    mut game: ResMut<Game>,
    gain: Res<GainSound>,
    mut commands: Commands,
) {
    for event in events.read() {
        let FileDragAndDrop::DroppedFile { path_buf, .. } = event else {
            continue;
        };

        match game.sim.add_fuel(&FsProbe, path_buf) {
            Ok(fuel) => {
                debug!("burned {} ({}B)", path_buf.display(), fuel.bytes);
                commands.spawn(AudioBundle {
                    source: gain.0.clone(),
                    settings: PlaybackSettings::DESPAWN,
                });
            }
            // Already surfaced through the status line
            Err(FuelError::Duplicate | FuelError::Extinguished) => {}
            Err(FuelError::Unreadable(err)) => {
                warn!("could not read {}: {err}", path_buf.display());
            }
        }
    }
}

fn handle_reset_key(keyboard: Res<ButtonInput<KeyCode>>, mut game: ResMut<Game>) {
    if keyboard.just_pressed(KeyCode::Space) {
        let now_ms = game.now_ms();
        game.sim.reset(now_ms);
    }
}

/// Screen space (origin top-left, y down) to Bevy world space (origin
/// center, y up).
fn to_world(x: f32, y: f32) -> Vec3 {
    Vec3::new(x - SCREEN_WIDTH / 2.0, SCREEN_HEIGHT / 2.0 - y, 0.0)
}

fn sync_ember_sprites(
    mut commands: Commands,
    game: Res<Game>,
    sprites: Query<Entity, With<EmberSprite>>,
) {
    for entity in &sprites {
        commands.entity(entity).despawn();
    }

    for ember in game.sim.embers().iter() {
        let position = ember.position();
        let Rgb { r, g, b } = ember.color();

        commands.spawn((
            SpriteBundle {
                sprite: Sprite {
                    color: Color::srgb_u8(r, g, b),
                    custom_size: Some(Vec2::splat(ember.size())),
                    ..default()
                },
                transform: Transform::from_translation(to_world(position.x, position.y)),
                ..default()
            },
            EmberSprite,
        ));
    }
}

fn update_hud(
    game: Res<Game>,
    mut status_query: Query<&mut Text, (With<StatusText>, Without<ScoreText>)>,
    mut score_query: Query<&mut Text, With<ScoreText>>,
) {
    let temperature = game.sim.temperature();
    let Rgb { r, g, b } = temperature_to_color(temperature.as_f64());

    let mut status = status_query.single_mut();
    status.sections[0].value = format!("Temperature: {temperature}\n{}", game.sim.tip());
    status.sections[0].style.color = Color::srgb_u8(r, g, b);

    let mut score = score_query.single_mut();
    score.sections[0].value = format!(
        "Score: {}\nBest score: {}",
        game.sim.score(),
        game.sim.best_score()
    );
}

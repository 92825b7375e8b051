//! Movement domain: input sampling for locomotion.

use bevy::prelude::*;

use crate::movement::MovementInput;

/// Axis value produced by the keyboard while the walk modifier is held.
/// Sits inside the slow-walk band so keyboards get both speeds too.
const KEYBOARD_WALK_AXIS: f32 = 0.3;

pub(crate) fn read_input(
    keyboard: Res<ButtonInput<KeyCode>>,
    gamepads: Query<&Gamepad>,
    mut input: ResMut<MovementInput>,
) {
    // Horizontal axis
    let mut x = 0.0;
    if keyboard.pressed(KeyCode::KeyA) || keyboard.pressed(KeyCode::ArrowLeft) {
        x -= 1.0;
    }
    if keyboard.pressed(KeyCode::KeyD) || keyboard.pressed(KeyCode::ArrowRight) {
        x += 1.0;
    }
    if x != 0.0 && keyboard.pressed(KeyCode::ShiftLeft) {
        x *= KEYBOARD_WALK_AXIS;
    }

    let mut jump_pressed =
        keyboard.just_pressed(KeyCode::Space) || keyboard.just_pressed(KeyCode::KeyK);
    let mut jump_released =
        keyboard.just_released(KeyCode::Space) || keyboard.just_released(KeyCode::KeyK);
    let ball_keys = [KeyCode::KeyS, KeyCode::ArrowDown, KeyCode::KeyJ];
    let mut ball_pressed = keyboard.any_just_pressed(ball_keys);
    let mut ball_held = keyboard.any_pressed(ball_keys);
    let mut ball_released = keyboard.any_just_released(ball_keys);

    for gamepad in &gamepads {
        let stick = gamepad.get(GamepadAxis::LeftStickX).unwrap_or(0.0);
        if x == 0.0 && stick.is_finite() && stick != 0.0 {
            x = stick.clamp(-1.0, 1.0);
        }

        jump_pressed |= gamepad.just_pressed(GamepadButton::South);
        jump_released |= gamepad.just_released(GamepadButton::South);
        ball_pressed |= gamepad.just_pressed(GamepadButton::West);
        ball_held |= gamepad.pressed(GamepadButton::West);
        ball_released |= gamepad.just_released(GamepadButton::West);
    }

    input.axis_x = x;
    input.ball_held = ball_held;
    // Edges stay latched until a fixed tick consumes them
    input.jump_just_pressed |= jump_pressed;
    input.jump_just_released |= jump_released;
    input.ball_just_pressed |= ball_pressed;
    input.ball_just_released |= ball_released;
}

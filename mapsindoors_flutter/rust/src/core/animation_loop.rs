//! FPS-controlled loop driving camera transitions of a session map.
//!
//! The loop runs as a tokio task and advances the running easing of its
//! [`HeadlessMap`] on every tick. Completion listeners of camera animations are
//! called from this task. It is controlled through commands sent over a channel.

use std::sync::Arc;
use std::time::Duration;

use mapsindoors_camera::HeadlessMap;
use tokio::runtime::Handle;
use tokio::sync::mpsc;
use tokio::time::{interval, MissedTickBehavior};

use crate::api::dart_types::AnimationConfig;

/// Highest frame rate the loop accepts.
pub const MAX_FPS: u32 = 120;

/// Commands that can be sent to the animation loop.
#[derive(Debug, Clone, Copy)]
pub enum AnimationCommand {
    /// Start ticking
    Start,
    /// Stop the loop and exit its task
    Stop,
    /// Stop ticking but keep the task alive
    Pause,
    /// Resume ticking
    Resume,
    /// Change FPS setting
    SetFps(u32),
}

/// State of the animation loop task.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum LoopState {
    Stopped,
    Running,
    Paused,
}

/// Error types for animation loop operations.
#[derive(Debug, thiserror::Error)]
pub enum AnimationLoopError {
    #[error("Invalid FPS value: {0}")]
    InvalidFps(u32),
    #[error("Channel send error: {0}")]
    ChannelSendError(String),
}

/// Loop ticking a [`HeadlessMap`] at a fixed frame rate.
pub struct AnimationLoop {
    command_sender: mpsc::UnboundedSender<AnimationCommand>,
}

impl AnimationLoop {
    /// Spawns the loop task on the runtime. The loop starts stopped.
    pub fn spawn(runtime: &Handle, map: Arc<HeadlessMap>, config: AnimationConfig) -> Self {
        let (command_sender, command_receiver) = mpsc::unbounded_channel();
        runtime.spawn(Self::tick_task(command_receiver, map, config));

        Self { command_sender }
    }

    pub fn start(&self) -> Result<(), AnimationLoopError> {
        self.send_command(AnimationCommand::Start)
    }

    pub fn stop(&self) -> Result<(), AnimationLoopError> {
        self.send_command(AnimationCommand::Stop)
    }

    pub fn pause(&self) -> Result<(), AnimationLoopError> {
        self.send_command(AnimationCommand::Pause)
    }

    pub fn resume(&self) -> Result<(), AnimationLoopError> {
        self.send_command(AnimationCommand::Resume)
    }

    /// Sets the target FPS, between 1 and [`MAX_FPS`].
    pub fn set_fps(&self, fps: u32) -> Result<(), AnimationLoopError> {
        if fps == 0 || fps > MAX_FPS {
            return Err(AnimationLoopError::InvalidFps(fps));
        }
        self.send_command(AnimationCommand::SetFps(fps))
    }

    fn send_command(&self, command: AnimationCommand) -> Result<(), AnimationLoopError> {
        self.command_sender
            .send(command)
            .map_err(|e| AnimationLoopError::ChannelSendError(e.to_string()))
    }

    async fn tick_task(
        mut command_receiver: mpsc::UnboundedReceiver<AnimationCommand>,
        map: Arc<HeadlessMap>,
        config: AnimationConfig,
    ) {
        let mut state = LoopState::Stopped;
        let mut interval_timer = frame_interval(config.fps.clamp(1, MAX_FPS));

        loop {
            tokio::select! {
                command = command_receiver.recv() => {
                    match command {
                        Some(AnimationCommand::Start) | Some(AnimationCommand::Resume) => {
                            state = LoopState::Running;
                            log::debug!("Animation loop running");
                        }
                        Some(AnimationCommand::Stop) | None => {
                            log::debug!("Animation loop stopped");
                            break;
                        }
                        Some(AnimationCommand::Pause) => {
                            state = LoopState::Paused;
                            log::debug!("Animation loop paused");
                        }
                        Some(AnimationCommand::SetFps(fps)) => {
                            interval_timer = frame_interval(fps);
                            log::info!("Animation loop FPS changed to {fps}");
                        }
                    }
                }

                _ = interval_timer.tick() => {
                    if state == LoopState::Running {
                        map.animate();
                    }
                }
            }
        }

        log::debug!("Animation loop task exited");
    }
}

impl Drop for AnimationLoop {
    fn drop(&mut self) {
        let _ = self.send_command(AnimationCommand::Stop);
    }
}

fn frame_interval(fps: u32) -> tokio::time::Interval {
    let mut timer = interval(Duration::from_secs_f64(1.0 / fps as f64));
    timer.set_missed_tick_behavior(MissedTickBehavior::Skip);
    timer
}

#[cfg(test)]
mod tests {
    use mapsindoors_camera::{AnimationOptions, CameraOptions, MapSdk, ViewportSize};
    use tokio::sync::oneshot;

    use super::*;

    #[tokio::test]
    async fn running_loop_finishes_easing() {
        let map = Arc::new(HeadlessMap::new(ViewportSize::new(400, 400)));
        let animation_loop =
            AnimationLoop::spawn(&Handle::current(), map.clone(), AnimationConfig::default());
        animation_loop.start().expect("loop is alive");

        let (sender, receiver) = oneshot::channel();
        map.ease_to(
            Some(&CameraOptions::zoom(6.0)),
            AnimationOptions::from_millis(50),
            Box::new(move || {
                let _ = sender.send(());
            }),
        );

        tokio::time::timeout(Duration::from_secs(5), receiver)
            .await
            .expect("easing finished in time")
            .expect("listener called");
        assert_eq!(map.camera_state().zoom, 6.0);
    }

    #[tokio::test]
    async fn invalid_fps_is_rejected() {
        let map = Arc::new(HeadlessMap::new(ViewportSize::new(400, 400)));
        let animation_loop =
            AnimationLoop::spawn(&Handle::current(), map, AnimationConfig::default());

        assert!(matches!(
            animation_loop.set_fps(0),
            Err(AnimationLoopError::InvalidFps(0))
        ));
        assert!(matches!(
            animation_loop.set_fps(MAX_FPS + 1),
            Err(AnimationLoopError::InvalidFps(_))
        ));
        assert!(animation_loop.set_fps(30).is_ok());
    }
}

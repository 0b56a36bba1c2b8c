/// Errors that can occur while bringing up the window, framebuffer or
/// audio device. All of these are fatal: they happen once, at startup,
/// and there is nothing to retry.
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    #[error("failed to start event loop: {0}")]
    EventLoop(#[from] winit::error::EventLoopError),

    #[error("failed to create window: {0}")]
    Window(#[from] winit::error::OsError),

    #[error("failed to create framebuffer surface: {0}")]
    Surface(#[from] pixels::Error),

    #[error("failed to open audio output device: {0}")]
    AudioDevice(#[from] rodio::StreamError),
}

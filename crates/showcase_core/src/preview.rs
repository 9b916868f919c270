//! Still-frame previews for video thumbnails.
//!
//! A video thumbnail ships with a fallback image. At page-ready time a muted,
//! inline preview video is injected in front of it and seeked to a
//! representative frame. Once the seek lands the fallback image is hidden. If
//! the video is still not showing a frame when the fallback timer fires, the
//! preview is removed and the fallback image stays.

use serde::{Deserialize, Serialize};

/// `HTMLMediaElement.HAVE_CURRENT_DATA`: a frame is available for display.
pub const HAVE_CURRENT_DATA: u16 = 2;

/// Timing knobs for preview generation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PreviewTimings {
    /// Upper bound for the preview frame position, in seconds.
    pub max_seek_secs: f64,
    /// Duration assumed when the element reports none.
    pub default_duration_secs: f64,
    /// Time the preview gets to show a frame before it is removed.
    pub fallback_timeout_ms: u32,
}

impl Default for PreviewTimings {
    fn default() -> Self {
        Self {
            max_seek_secs: 15.0,
            default_duration_secs: 5.0,
            fallback_timeout_ms: 3500,
        }
    }
}

impl PreviewTimings {
    /// Frame position to seek to for a video of `duration` seconds.
    pub fn seek_target(&self, duration: f64) -> f64 {
        let duration = if duration.is_finite() && duration >= 0.0 {
            duration
        } else {
            self.default_duration_secs
        };
        duration.min(self.max_seek_secs)
    }
}

/// The injected preview element and its fallback image.
pub trait PreviewSurface {
    /// Insert a muted, inline, non-autoplaying video for `src` before the
    /// fallback image.
    fn inject(&mut self, src: &str);
    /// Seek the preview to `secs` on the next animation frame.
    fn schedule_seek(&mut self, secs: f64);
    fn pause(&mut self);
    fn hide_fallback(&mut self);
    /// Detach the preview video, leaving the fallback image in place.
    fn remove(&mut self);
    /// Current `readyState` of the preview video.
    fn ready_state(&self) -> u16;
}

/// Where a preview is in its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PreviewPhase {
    NotStarted,
    /// Video injected, waiting for metadata.
    Loading,
    /// Seek requested to the given position.
    Seeking(f64),
    /// Frame visible, fallback hidden.
    Ready,
    /// Preview removed after the fallback timer.
    Abandoned,
}

/// Preview state machine for one video thumbnail.
#[derive(Debug)]
pub struct VideoPreview<S> {
    phase: PreviewPhase,
    timings: PreviewTimings,
    surface: S,
}

impl<S: PreviewSurface> VideoPreview<S> {
    pub fn new(surface: S, timings: PreviewTimings) -> Self {
        Self {
            phase: PreviewPhase::NotStarted,
            timings,
            surface,
        }
    }

    /// Inject the preview element. Only the first call has any effect.
    ///
    /// Returns `true` if the preview was started by this call; the caller
    /// then arms the fallback timer.
    pub fn start(&mut self, src: &str) -> bool {
        if self.phase != PreviewPhase::NotStarted {
            return false;
        }
        self.surface.inject(src);
        self.phase = PreviewPhase::Loading;
        true
    }

    /// Metadata arrived; request the seek. `duration` may be NaN or infinite.
    pub fn on_loaded_metadata(&mut self, duration: f64) {
        if self.phase != PreviewPhase::Loading {
            return;
        }
        let target = self.timings.seek_target(duration);
        self.surface.schedule_seek(target);
        self.phase = PreviewPhase::Seeking(target);
    }

    /// The seek completed: freeze the frame and hide the fallback image.
    pub fn on_seeked(&mut self) {
        if !matches!(self.phase, PreviewPhase::Seeking(_)) {
            return;
        }
        self.surface.pause();
        self.surface.hide_fallback();
        self.phase = PreviewPhase::Ready;
    }

    /// Loading or seeking failed. Non-fatal: the fallback timer decides.
    pub fn on_error(&mut self) {
        log::trace!("Video preview error in phase {:?}", self.phase);
    }

    /// The fallback timer fired.
    ///
    /// Removes the preview unless it already succeeded or the element has a
    /// displayable frame.
    pub fn on_fallback_timeout(&mut self) {
        match self.phase {
            PreviewPhase::Loading | PreviewPhase::Seeking(_) => {}
            _ => return,
        }
        if self.surface.ready_state() >= HAVE_CURRENT_DATA {
            return;
        }
        log::debug!("Video preview not ready in time, keeping fallback image");
        self.surface.remove();
        self.phase = PreviewPhase::Abandoned;
    }

    pub fn phase(&self) -> PreviewPhase {
        self.phase
    }

    pub fn timings(&self) -> &PreviewTimings {
        &self.timings
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Default)]
    struct FakeSurface {
        injected: Option<String>,
        injections: usize,
        seek: Option<f64>,
        paused: bool,
        fallback_visible: bool,
        removed: bool,
        ready_state: u16,
    }

    impl PreviewSurface for FakeSurface {
        fn inject(&mut self, src: &str) {
            self.injected = Some(src.to_string());
            self.injections += 1;
            self.fallback_visible = true;
        }

        fn schedule_seek(&mut self, secs: f64) {
            self.seek = Some(secs);
        }

        fn pause(&mut self) {
            self.paused = true;
        }

        fn hide_fallback(&mut self) {
            self.fallback_visible = false;
        }

        fn remove(&mut self) {
            self.removed = true;
        }

        fn ready_state(&self) -> u16 {
            self.ready_state
        }
    }

    fn preview() -> VideoPreview<FakeSurface> {
        VideoPreview::new(FakeSurface::default(), PreviewTimings::default())
    }

    #[test]
    fn test_seek_target() {
        let t = PreviewTimings::default();
        assert_eq!(t.seek_target(60.0), 15.0);
        assert_eq!(t.seek_target(8.5), 8.5);
        assert_eq!(t.seek_target(f64::NAN), 5.0);
        assert_eq!(t.seek_target(f64::INFINITY), 5.0);
    }

    #[test]
    fn test_start_only_once() {
        let mut p = preview();
        assert!(p.start("clip.mp4"));
        assert!(!p.start("clip.mp4"));
        assert_eq!(p.surface().injections, 1);
        assert_eq!(p.phase(), PreviewPhase::Loading);
    }

    #[test]
    fn test_successful_preview_hides_fallback() {
        let mut p = preview();
        p.start("clip.mp4");
        p.on_loaded_metadata(42.0);
        assert_eq!(p.surface().seek, Some(15.0));
        assert_eq!(p.phase(), PreviewPhase::Seeking(15.0));

        p.surface_mut().ready_state = 4;
        p.on_seeked();
        assert!(p.surface().paused);
        assert!(!p.surface().fallback_visible);
        assert_eq!(p.phase(), PreviewPhase::Ready);

        // Timer still fires later and must not undo the preview.
        p.on_fallback_timeout();
        assert!(!p.surface().removed);
        assert_eq!(p.phase(), PreviewPhase::Ready);
    }

    #[test]
    fn test_metadata_never_loads() {
        let mut p = preview();
        p.start("broken.mp4");
        p.on_fallback_timeout();

        assert!(p.surface().removed);
        assert!(p.surface().fallback_visible);
        assert_eq!(p.phase(), PreviewPhase::Abandoned);

        // Late events after removal are ignored.
        p.on_loaded_metadata(10.0);
        p.on_seeked();
        assert_eq!(p.surface().seek, None);
        assert!(p.surface().fallback_visible);
    }

    #[test]
    fn test_frame_available_survives_timeout() {
        let mut p = preview();
        p.start("slow.mp4");
        p.on_loaded_metadata(f64::NAN);
        p.surface_mut().ready_state = HAVE_CURRENT_DATA;
        p.on_fallback_timeout();

        assert!(!p.surface().removed);
        assert_eq!(p.phase(), PreviewPhase::Seeking(5.0));
    }

    #[test]
    fn test_error_is_not_fatal() {
        let mut p = preview();
        p.start("clip.mp4");
        p.on_loaded_metadata(3.0);
        p.on_error();
        assert_eq!(p.phase(), PreviewPhase::Seeking(3.0));
        p.on_seeked();
        assert_eq!(p.phase(), PreviewPhase::Ready);
    }

    #[test]
    fn test_seek_before_start_is_ignored() {
        let mut p = preview();
        p.on_loaded_metadata(3.0);
        p.on_seeked();
        p.on_fallback_timeout();
        assert_eq!(p.phase(), PreviewPhase::NotStarted);
        assert!(!p.surface().removed);
    }
}

// SPDX-License-Identifier: MPL-2.0
//! Local video probing: duration and first-frame thumbnail.
//!
//! This is the "metadata loaded" source for the progress tracker. It runs on
//! a blocking task and is never retried; a failure simply leaves the entry
//! with an unknown duration.

use crate::domain::media::VideoMetadata;
use crate::error::MediaError;
use std::path::Path;
use std::sync::Once;

/// Static flag to ensure FFmpeg is initialized only once.
static FFMPEG_INIT: Once = Once::new();

/// Initialize FFmpeg with appropriate log level.
///
/// Safe to call multiple times. The FFmpeg log level is set to ERROR to
/// suppress container warnings on stderr.
pub fn init_ffmpeg() -> Result<(), MediaError> {
    let mut init_result = Ok(());

    FFMPEG_INIT.call_once(|| {
        if let Err(e) = ffmpeg_next::init() {
            init_result = Err(MediaError::Init(e.to_string()));
            return;
        }

        // SAFETY: av_log_set_level is thread-safe and only affects logging
        unsafe {
            ffmpeg_next::ffi::av_log_set_level(ffmpeg_next::ffi::AV_LOG_ERROR);
        }
    });

    init_result
}

/// Decoded first frame of a video, tightly packed RGBA.
#[derive(Debug, Clone, PartialEq)]
pub struct Thumbnail {
    pub width: u32,
    pub height: u32,
    pub rgba: Vec<u8>,
}

/// Everything a probe learns about a local file.
#[derive(Debug, Clone)]
pub struct ProbeResult {
    pub metadata: VideoMetadata,
    /// `None` when the first frame could not be decoded; the metadata is still usable.
    pub thumbnail: Option<Thumbnail>,
}

/// Probes a local video file for metadata and its first frame.
///
/// Thumbnail decoding failures are tolerated; only a file that cannot be
/// opened or has no video stream is an error.
pub fn probe_local<P: AsRef<Path>>(path: P) -> Result<ProbeResult, MediaError> {
    let metadata = extract_video_metadata(&path)?;
    let thumbnail = match extract_thumbnail(&path) {
        Ok(thumb) => Some(thumb),
        Err(err) => {
            eprintln!(
                "Thumbnail unavailable for {}: {}",
                path.as_ref().display(),
                err
            );
            None
        }
    };
    Ok(ProbeResult {
        metadata,
        thumbnail,
    })
}

/// Extract video metadata (dimensions and duration) without decoding frames.
pub fn extract_video_metadata<P: AsRef<Path>>(path: P) -> Result<VideoMetadata, MediaError> {
    init_ffmpeg()?;

    let ictx = ffmpeg_next::format::input(&path)
        .map_err(|e| MediaError::IoError(format!("Failed to open video file: {e}")))?;

    let video_stream = ictx
        .streams()
        .best(ffmpeg_next::media::Type::Video)
        .ok_or(MediaError::NoVideoStream)?;

    let context_decoder =
        ffmpeg_next::codec::context::Context::from_parameters(video_stream.parameters())
            .map_err(|e| MediaError::DecodingFailed(format!("codec context: {e}")))?;
    let decoder = context_decoder
        .decoder()
        .video()
        .map_err(|e| MediaError::DecodingFailed(format!("video decoder: {e}")))?;

    let width = decoder.width();
    let height = decoder.height();
    if width == 0 || height == 0 {
        return Err(MediaError::InvalidDimensions { width, height });
    }

    // Stream duration first, container duration as fallback
    let stream_duration = if video_stream.duration() > 0 {
        let time_base = video_stream.time_base();
        Some(
            video_stream.duration() as f64 * f64::from(time_base.numerator())
                / f64::from(time_base.denominator()),
        )
    } else if ictx.duration() > 0 {
        Some(ictx.duration() as f64 / f64::from(ffmpeg_next::ffi::AV_TIME_BASE))
    } else {
        None
    };

    Ok(VideoMetadata {
        width,
        height,
        duration_secs: normalize_duration(stream_duration),
    })
}

/// Decodes the first frame of a video file as RGBA.
pub fn extract_thumbnail<P: AsRef<Path>>(path: P) -> Result<Thumbnail, MediaError> {
    init_ffmpeg()?;

    let mut ictx = ffmpeg_next::format::input(&path)
        .map_err(|e| MediaError::IoError(format!("Failed to open video file: {e}")))?;

    let input = ictx
        .streams()
        .best(ffmpeg_next::media::Type::Video)
        .ok_or(MediaError::NoVideoStream)?;
    let video_stream_index = input.index();

    let context_decoder = ffmpeg_next::codec::context::Context::from_parameters(input.parameters())
        .map_err(|e| MediaError::DecodingFailed(format!("codec context: {e}")))?;
    let mut decoder = context_decoder
        .decoder()
        .video()
        .map_err(|e| MediaError::DecodingFailed(format!("video decoder: {e}")))?;

    let width = decoder.width();
    let height = decoder.height();
    if width == 0 || height == 0 {
        return Err(MediaError::InvalidDimensions { width, height });
    }

    let mut scaler = ffmpeg_next::software::scaling::Context::get(
        decoder.format(),
        width,
        height,
        ffmpeg_next::format::Pixel::RGBA,
        width,
        height,
        ffmpeg_next::software::scaling::Flags::BILINEAR,
    )
    .map_err(|e| MediaError::DecodingFailed(format!("scaler: {e}")))?;

    let mut rgb_frame = ffmpeg_next::frame::Video::empty();

    for (stream, packet) in ictx.packets() {
        if stream.index() == video_stream_index {
            decoder
                .send_packet(&packet)
                .map_err(|e| MediaError::DecodingFailed(format!("send packet: {e}")))?;

            let mut decoded = ffmpeg_next::frame::Video::empty();
            if decoder.receive_frame(&mut decoded).is_ok() {
                scaler
                    .run(&decoded, &mut rgb_frame)
                    .map_err(|e| MediaError::DecodingFailed(format!("scale frame: {e}")))?;
                break;
            }
        }
    }

    if rgb_frame.data(0).is_empty() {
        return Err(MediaError::DecodingFailed(
            "could not decode first frame".to_string(),
        ));
    }

    let width = rgb_frame.width();
    let height = rgb_frame.height();
    let rgba = pack_rows(rgb_frame.data(0), rgb_frame.stride(0), width, height);

    Ok(Thumbnail {
        width,
        height,
        rgba,
    })
}

/// Copies `height` rows of `width` RGBA pixels out of a strided buffer.
fn pack_rows(data: &[u8], stride: usize, width: u32, height: u32) -> Vec<u8> {
    let row_len = width as usize * 4;
    let mut rgba = Vec::with_capacity(row_len * height as usize);
    for y in 0..height as usize {
        let row_start = y * stride;
        rgba.extend_from_slice(&data[row_start..row_start + row_len]);
    }
    rgba
}

/// Drops durations that cannot drive a progress bar.
fn normalize_duration(duration: Option<f64>) -> Option<f64> {
    duration.filter(|secs| secs.is_finite() && *secs > 0.0)
}

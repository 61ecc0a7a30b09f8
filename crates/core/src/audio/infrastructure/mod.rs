pub mod ffmpeg_audio_decoder;

pub mod turtle_codec;

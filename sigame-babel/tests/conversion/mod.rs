mod assets;
mod cross_format;

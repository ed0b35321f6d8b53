mod floats;
mod integers;
mod text;

pub mod procgen;

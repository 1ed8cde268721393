pub mod loop_synthesizer;
pub mod openroute;
pub mod overpass;
pub mod overpass_tags;
pub mod poi_service;
pub mod route_planner;

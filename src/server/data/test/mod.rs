mod lecture;
mod quiz;

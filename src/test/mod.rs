mod routing;
mod simulation;

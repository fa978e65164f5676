mod icon;
mod menu;
mod paths;

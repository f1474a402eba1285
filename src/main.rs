fn main() {
    raim_map_pwa::run();
}

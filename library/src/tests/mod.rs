mod scene_compilation;

use super::*;
use std::path::PathBuf;

mod config_tests {
    use super::*;

    #[test]
    fn test_minilm_config_default() {
        let config = MiniLmConfig::default();
        assert_eq!(config.embedding_dim, MINILM_EMBEDDING_DIM);
        assert_eq!(config.max_seq_len, MINILM_MAX_SEQ_LEN);
        assert_eq!(config.batch_size, MINILM_BATCH_SIZE);
        assert!(!config.testing_stub);
        assert!(config.model_dir.as_os_str().is_empty());
    }

    #[test]
    fn test_minilm_config_new() {
        let config = MiniLmConfig::new("/models/all-MiniLM-L6-v2");
        assert_eq!(config.model_dir, PathBuf::from("/models/all-MiniLM-L6-v2"));
        assert!(!config.testing_stub);
    }

    #[test]
    fn test_minilm_config_stub_validates() {
        let config = MiniLmConfig::stub();
        assert!(config.testing_stub);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validation_empty_path_no_stub() {
        let config = MiniLmConfig::default();
        let err = config.validate().unwrap_err();
        assert!(matches!(err, EmbeddingError::InvalidConfig { .. }));
    }

    #[test]
    fn test_validation_missing_directory() {
        let config = MiniLmConfig::new("/definitely/not/a/model/dir");
        let err = config.validate().unwrap_err();
        assert!(matches!(err, EmbeddingError::ModelNotFound { .. }));
    }

    #[test]
    fn test_validation_incomplete_model_directory() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("config.json"), "{}").unwrap();

        let config = MiniLmConfig::new(dir.path());
        let missing = config.missing_files();
        assert_eq!(missing.len(), 2);
        assert!(missing.contains(&dir.path().join("model.safetensors")));
        assert!(missing.contains(&dir.path().join("tokenizer.json")));

        match config.validate() {
            Err(EmbeddingError::ModelNotFound { path }) => {
                assert_eq!(path, dir.path().join("model.safetensors"));
            }
            other => panic!("expected ModelNotFound, got {other:?}"),
        }
    }

    #[test]
    fn test_validation_rejects_zero_sizes() {
        let zero_dim = MiniLmConfig {
            embedding_dim: 0,
            ..MiniLmConfig::stub()
        };
        assert!(zero_dim.validate().is_err());

        let zero_batch = MiniLmConfig {
            batch_size: 0,
            ..MiniLmConfig::stub()
        };
        assert!(zero_batch.validate().is_err());

        let zero_seq = MiniLmConfig {
            max_seq_len: 0,
            ..MiniLmConfig::stub()
        };
        assert!(zero_seq.validate().is_err());
    }
}

mod stub_tests {
    use super::*;

    fn cosine(a: &[f32], b: &[f32]) -> f32 {
        a.iter().zip(b).map(|(x, y)| x * y).sum()
    }

    #[test]
    fn test_stub_load() {
        let embedder = MiniLmEmbedder::stub().unwrap();
        assert!(embedder.is_stub());
        assert!(!embedder.has_model());
        assert_eq!(embedder.embedding_dim(), MINILM_EMBEDDING_DIM);
        assert_eq!(embedder.backend(), Backend::Cpu);
    }

    #[test]
    fn test_stub_debug_mentions_mode() {
        let embedder = MiniLmEmbedder::stub().unwrap();
        let debug_str = format!("{:?}", embedder);
        assert!(debug_str.contains("MiniLmEmbedder"));
        assert!(debug_str.contains("Stub"));
    }

    #[test]
    fn test_stub_embedding_is_unit_length() {
        let embedder = MiniLmEmbedder::stub().unwrap();
        let embedding = embedder.embed("Explain the water cycle.").unwrap();

        assert_eq!(embedding.len(), MINILM_EMBEDDING_DIM);
        let norm: f32 = embedding.iter().map(|x| x * x).sum::<f32>().sqrt();
        assert!((norm - 1.0).abs() < 1e-5, "norm was {norm}");
    }

    #[test]
    fn test_stub_is_deterministic() {
        let embedder = MiniLmEmbedder::stub().unwrap();
        let first = embedder.embed("Evaluate the argument.").unwrap();
        let second = embedder.embed("Evaluate the argument.").unwrap();
        assert_eq!(first, second);

        let other = MiniLmEmbedder::stub().unwrap();
        assert_eq!(first, other.embed("Evaluate the argument.").unwrap());
    }

    #[test]
    fn test_stub_ignores_case_and_punctuation() {
        let embedder = MiniLmEmbedder::stub().unwrap();
        let a = embedder.embed("Define photosynthesis").unwrap();
        let b = embedder.embed("define, PHOTOSYNTHESIS!").unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_stub_shared_words_are_similar() {
        let embedder = MiniLmEmbedder::stub().unwrap();
        let query = embedder.embed("define").unwrap();
        let same = embedder.embed("define").unwrap();
        assert!((cosine(&query, &same) - 1.0).abs() < 1e-5);
    }

    #[test]
    fn test_stub_text_without_tokens_is_zero_vector() {
        let embedder = MiniLmEmbedder::stub().unwrap();
        let embedding = embedder.embed("?!  ...").unwrap();
        assert_eq!(embedding.len(), MINILM_EMBEDDING_DIM);
        assert!(embedding.iter().all(|v| *v == 0.0));
    }

    #[test]
    fn test_stub_batch_matches_single() {
        let embedder = MiniLmEmbedder::stub().unwrap();
        let texts = [
            "What is the capital of France?",
            "Compare and contrast the French and American revolutions.",
            "Define photosynthesis.",
        ];

        let batch = embedder.embed_batch(&texts).unwrap();
        assert_eq!(batch.len(), texts.len());
        for (text, embedding) in texts.iter().zip(&batch) {
            assert_eq!(&embedder.embed(text).unwrap(), embedding);
        }
    }

    #[test]
    fn test_stub_empty_batch() {
        let embedder = MiniLmEmbedder::stub().unwrap();
        assert!(embedder.embed_batch(&[]).unwrap().is_empty());
    }

    #[test]
    fn test_normalize_leaves_zero_vector() {
        assert_eq!(normalize(vec![0.0, 0.0]), vec![0.0, 0.0]);
        assert_eq!(normalize(vec![3.0, 4.0]), vec![0.6, 0.8]);
    }
}

/// Full transformer inference against an all-MiniLM-L6-v2 directory.
/// Run with: HOTS_MODEL_PATH=/path/to/model cargo test --lib minilm -- --ignored
mod model_tests {
    use super::*;
    use crate::classifier::{QuestionClassifier, Tier};
    use crate::constants::SCORE_TOLERANCE;
    use crate::keywords::KeywordSet;

    const MIXED_LENGTHS: [&str; 5] = [
        "Define photosynthesis.",
        "List.",
        "Compare and contrast the economic policies of two governments over the last century, \
         using at least three primary sources to support your argument.",
        "What is the boiling point of water at sea level?",
        "Design an experiment to test plant growth.",
    ];

    fn model_config() -> MiniLmConfig {
        let model_dir = std::env::var("HOTS_MODEL_PATH")
            .unwrap_or_else(|_| "/models/all-MiniLM-L6-v2".to_string());
        MiniLmConfig::new(model_dir)
    }

    fn load_model() -> MiniLmEmbedder {
        let embedder = MiniLmEmbedder::load(model_config()).expect("Should load model");
        assert!(embedder.has_model());
        assert!(!embedder.is_stub());
        embedder
    }

    fn assert_close(a: &[f32], b: &[f32], label: &str) {
        assert_eq!(a.len(), b.len(), "{label}");
        let max_diff = a
            .iter()
            .zip(b)
            .map(|(x, y)| (x - y).abs())
            .fold(0.0f32, f32::max);
        assert!(
            max_diff < SCORE_TOLERANCE,
            "{label}: batch and single embeddings differ by {max_diff}"
        );
    }

    #[test]
    #[ignore]
    fn test_model_embedding_is_unit_length() {
        let embedder = load_model();

        for text in MIXED_LENGTHS {
            let embedding = embedder.embed(text).expect("Should embed");
            assert_eq!(embedding.len(), MINILM_EMBEDDING_DIM);

            let norm: f32 = embedding.iter().map(|x| x * x).sum::<f32>().sqrt();
            assert!(
                (norm - 1.0).abs() < 1e-4,
                "Embedding should be L2 normalized, got norm = {}",
                norm
            );
        }
    }

    #[test]
    #[ignore]
    fn test_model_batch_matches_single_mixed_lengths() {
        let embedder = load_model();
        let batch = embedder.embed_batch(&MIXED_LENGTHS).expect("Should embed batch");

        assert_eq!(batch.len(), MIXED_LENGTHS.len());
        for (text, from_batch) in MIXED_LENGTHS.iter().zip(&batch) {
            let single = embedder.embed(text).expect("Should embed");
            assert_close(from_batch, &single, text);
        }
    }

    #[test]
    #[ignore]
    fn test_model_batch_keeps_order_across_chunks() {
        let config = MiniLmConfig {
            batch_size: 2,
            ..model_config()
        };
        let embedder = MiniLmEmbedder::load(config).expect("Should load model");
        assert!(MIXED_LENGTHS.len() > embedder.config().batch_size);

        let batch = embedder.embed_batch(&MIXED_LENGTHS).expect("Should embed batch");
        assert_eq!(batch.len(), MIXED_LENGTHS.len());
        for (text, from_batch) in MIXED_LENGTHS.iter().zip(&batch) {
            let single = embedder.embed(text).expect("Should embed");
            assert_close(from_batch, &single, text);
        }
    }

    #[test]
    #[ignore]
    fn test_model_is_deterministic() {
        let embedder = load_model();
        let first = embedder.embed("Evaluate the argument.").expect("Should embed");
        let second = embedder.embed("Evaluate the argument.").expect("Should embed");
        assert_eq!(first, second);
    }

    #[test]
    #[ignore]
    fn test_model_classifies_documented_scenario() {
        let keywords = KeywordSet::new(
            ["define", "list", "what is"],
            ["evaluate", "design", "compare and contrast"],
        );
        let classifier = QuestionClassifier::new(load_model(), &keywords).expect("Should build");

        let recall = classifier
            .classify_detailed("Define photosynthesis.")
            .expect("Should classify");
        assert_eq!(recall.tier, Tier::Lots, "{recall:?}");

        let design = classifier
            .classify_detailed("Design an experiment to test plant growth.")
            .expect("Should classify");
        assert_eq!(design.tier, Tier::Hots, "{design:?}");
    }
}

#[cfg(test)]
mod tests {
    use crate::core::domain::Marketplace;
    use crate::core::error::ProfileError;
    use crate::io::loaders::{calculate_checksum, ColumnSummary, DataSource, DatasetLoader};
    use std::io::Write;
    use std::path::PathBuf;
    use tempfile::NamedTempFile;

    const PLAY_CSV: &str = "App,Category,Rating,Reviews,Size,Installs,Type,Price,Content Rating,Genres,Last Updated,Current Ver,Android Ver
Sample App,GAME,4.5,100,19M,\"10,000+\",Free,0,Everyone,Action,\"January 7, 2018\",1.0.0,4.0.3 and up
Sample App,GAME,4.5,250,19M,\"10,000+\",Free,0,Everyone,Action,\"January 7, 2018\",1.0.0,4.0.3 and up
Calculator,TOOLS,4.2,30,2M,\"1,000,000+\",Free,0,Everyone,Tools,\"March 3, 2018\",2.1,4.1 and up
";

    const APP_CSV: &str = "index,id,track_name,size_bytes,currency,price,rating_count_tot,rating_count_ver,user_rating,user_rating_ver,ver,cont_rating,prime_genre,sup_devices.num,ipadSc_urls.num,lang.num,vpp_lic
1,281656475,PAC-MAN Premium,100788224,USD,3.99,21292,26,4.0,4.5,6.3.5,4+,Games,38,5,10,1
2,281796108,Evernote - stay organized,158578688,USD,0.0,161065,26,4.0,3.5,8.2.2,4+,Productivity,37,5,23,1
";

    /// Helper to create a temp CSV file
    fn create_temp_csv(content: &str) -> NamedTempFile {
        let mut temp_file = NamedTempFile::new().unwrap();
        write!(temp_file, "{}", content).unwrap();
        temp_file
    }

    #[test]
    fn test_data_source_parse() {
        assert_eq!(
            DataSource::parse("https://example.com/apps.csv"),
            DataSource::Url("https://example.com/apps.csv".to_string())
        );
        assert_eq!(
            DataSource::parse("http://example.com/apps.csv"),
            DataSource::Url("http://example.com/apps.csv".to_string())
        );
        assert_eq!(
            DataSource::parse("data/apps.csv"),
            DataSource::File(PathBuf::from("data/apps.csv"))
        );
    }

    #[test]
    fn test_load_play_store_file() {
        let file = create_temp_csv(PLAY_CSV);
        let source = DataSource::File(file.path().to_path_buf());

        let result = DatasetLoader::load_play_store(&source).unwrap();
        assert_eq!(result.marketplace, Marketplace::PlayStore);
        assert_eq!(result.shape(), (3, 13));
        assert_eq!(result.column_names()[0], "App");
        assert_eq!(result.checksum, calculate_checksum(PLAY_CSV.as_bytes()));
    }

    #[test]
    fn test_load_app_store_drops_index_column() {
        let file = create_temp_csv(APP_CSV);
        let source = DataSource::File(file.path().to_path_buf());

        let result = DatasetLoader::load_app_store(&source).unwrap();
        assert_eq!(result.shape(), (2, 16));
        assert_eq!(result.column_names()[0], "id");
    }

    #[test]
    fn test_column_summaries_count_distinct_values() {
        let result = DatasetLoader::load_from_bytes(
            PLAY_CSV.as_bytes().to_vec(),
            DataSource::File(PathBuf::from("inline.csv")),
            Marketplace::PlayStore,
        )
        .unwrap();

        let summaries = result.column_summaries().unwrap();
        assert_eq!(summaries.len(), 13);
        assert_eq!(
            summaries[0],
            ColumnSummary {
                name: "App".to_string(),
                non_null: 3,
                unique: 2,
            }
        );
        let reviews = summaries.iter().find(|s| s.name == "Reviews").unwrap();
        assert_eq!(reviews.unique, 3);
    }

    #[test]
    fn test_column_summaries_skip_missing_cells() {
        let result = DatasetLoader::load_from_bytes(
            b"App,Rating\nA,4.1\nB,\nC,4.1\n".to_vec(),
            DataSource::File(PathBuf::from("inline.csv")),
            Marketplace::PlayStore,
        )
        .unwrap();

        let summaries = result.column_summaries().unwrap();
        assert_eq!(
            summaries[1],
            ColumnSummary {
                name: "Rating".to_string(),
                non_null: 2,
                unique: 1,
            }
        );
    }

    #[test]
    fn test_missing_file_is_load_error() {
        let source = DataSource::File(PathBuf::from("/nonexistent/googleplaystore.csv"));
        let err = DatasetLoader::load_play_store(&source).unwrap_err();
        assert!(matches!(err, ProfileError::Load(_)));
    }

    #[test]
    fn test_checksum_consistency() {
        let checksum1 = calculate_checksum(b"App\nA\n");
        let checksum2 = calculate_checksum(b"App\nA\n");
        assert_eq!(checksum1, checksum2);
        assert_eq!(checksum1.len(), 64);
        assert_ne!(checksum1, calculate_checksum(b"App\nB\n"));
    }
}

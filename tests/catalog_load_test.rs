use anyhow::Result;
use course_advisor::{AdvisorError, Catalog, FieldParser, LocalStorage, Lookup};
use std::io::Write;
use tempfile::{NamedTempFile, TempDir};

fn write_catalog(content: &str) -> Result<NamedTempFile> {
    let mut temp_file = NamedTempFile::new()?;
    temp_file.write_all(content.as_bytes())?;
    Ok(temp_file)
}

fn path_of(file: &NamedTempFile) -> &str {
    file.path().to_str().unwrap()
}

const SAMPLE_CATALOG: &str = r#"CSCI100,Introduction to Computer Science
CSCI101,Introduction to Programming in C++,CSCI100
CSCI200,Data Structures,CSCI101
MATH201,Discrete Mathematics
CSCI300,Introduction to Algorithms,CSCI200,MATH201
CSCI301,Advanced Programming in C++,CSCI101
CSCI350,"Operating Systems, Concepts",CSCI300
CSCI400,Large Software Development,CSCI301,CSCI350
CSCI700,Capstone,CSCI400,CSCI999
"#;

/// 測試完整課程檔載入、排序列表與先修課程解析
#[test]
fn test_load_sample_catalog_from_file() -> Result<()> {
    let file = write_catalog(SAMPLE_CATALOG)?;
    let mut catalog = Catalog::new();

    let report = catalog.load(&LocalStorage::new(), path_of(&file))?;

    assert!(report.warnings.is_empty());
    assert_eq!(report.lines_read, 9);
    // 9 門已定義課程加上 CSCI999 佔位紀錄
    assert_eq!(report.courses, 10);

    let ids: Vec<String> = catalog.list().into_iter().map(|course| course.id).collect();
    assert_eq!(
        ids,
        vec![
            "CSCI100", "CSCI101", "CSCI200", "CSCI300", "CSCI301", "CSCI350", "CSCI400",
            "CSCI700", "MATH201"
        ]
    );

    match catalog.lookup("csci700") {
        Lookup::Found(details) => {
            assert_eq!(details.title, "Capstone");
            assert_eq!(details.prerequisites.len(), 2);
            assert_eq!(details.prerequisites[0].id, "CSCI400");
            assert_eq!(
                details.prerequisites[0].title.as_deref(),
                Some("Large Software Development")
            );
            assert_eq!(details.prerequisites[1].id, "CSCI999");
            assert_eq!(details.prerequisites[1].title, None);
        }
        other => panic!("expected CSCI700 to be found, got {:?}", other),
    }

    assert_eq!(
        catalog.lookup("CSCI999"),
        Lookup::NotFound {
            id: "CSCI999".to_string()
        }
    );
    Ok(())
}

/// 測試前向參照：先修課程在後面才被定義
#[test]
fn test_forward_reference_regardless_of_order() -> Result<()> {
    for content in [
        "CSCI101,Intro to CS,CSCI100\nCSCI100,Intro Seminar\n",
        "CSCI100,Intro Seminar\nCSCI101,Intro to CS,CSCI100\n",
    ] {
        let file = write_catalog(content)?;
        let mut catalog = Catalog::new();
        catalog.load(&LocalStorage::new(), path_of(&file))?;

        let seminar = catalog.get("CSCI100").unwrap();
        assert_eq!(seminar.title, "Intro Seminar");
        assert!(!seminar.is_placeholder());
        assert_eq!(catalog.get("CSCI101").unwrap().prerequisites, vec!["CSCI100"]);
    }
    Ok(())
}

/// 測試各種可恢復問題都會產生警告並標示行號
#[test]
fn test_soft_issues_produce_line_numbered_warnings() -> Result<()> {
    let file = write_catalog(
        "CSCI101,Intro\n\nCSCI102\n  ,No ID,CSCI101\nCSCI300,\nCSCI400,Loops,,  \n",
    )?;
    let mut catalog = Catalog::new();

    let report = catalog.load(&LocalStorage::new(), path_of(&file))?;

    assert_eq!(
        report.warnings,
        vec![
            "Line 3 skipped: fewer than 2 fields",
            "Line 4 skipped: empty course ID",
            "Line 5 has empty title for course CSCI300",
        ]
    );

    let csci300 = catalog.get("CSCI300").unwrap();
    assert!(csci300.is_placeholder());
    assert!(catalog.get("CSCI102").is_none());
    assert!(catalog.get("CSCI400").unwrap().prerequisites.is_empty());

    let listed: Vec<(String, String)> = catalog
        .list()
        .into_iter()
        .map(|course| (course.id, course.title))
        .collect();
    assert_eq!(
        listed,
        vec![
            ("CSCI101".to_string(), "Intro".to_string()),
            ("CSCI400".to_string(), "Loops".to_string()),
        ]
    );
    Ok(())
}

/// 測試大小寫不同的課程代碼會合併為同一筆
#[test]
fn test_case_insensitive_ids_merge() -> Result<()> {
    let file = write_catalog("csci101,First Title,csci100\nCSCI101,Second Title,MATH201\n")?;
    let mut catalog = Catalog::new();
    catalog.load(&LocalStorage::new(), path_of(&file))?;

    let course = catalog.get("Csci101").unwrap();
    assert_eq!(course.id, "CSCI101");
    assert_eq!(course.title, "Second Title");
    assert_eq!(course.prerequisites, vec!["CSCI100", "MATH201"]);
    Ok(())
}

/// 測試檔案不存在時不會破壞已載入的資料
#[test]
fn test_missing_file_keeps_previous_catalog() -> Result<()> {
    let file = write_catalog("CSCI101,Intro\n")?;
    let temp_dir = TempDir::new()?;
    let mut catalog = Catalog::new();
    catalog.load(&LocalStorage::new(), path_of(&file))?;

    let missing = temp_dir.path().join("missing.csv");
    let result = catalog.load(&LocalStorage::new(), missing.to_str().unwrap());

    assert!(matches!(result, Err(AdvisorError::SourceUnavailable { .. })));
    assert_eq!(catalog.list().len(), 1);
    assert_eq!(catalog.get("CSCI101").unwrap().title, "Intro");
    Ok(())
}

/// 測試自訂分隔符號與引號中的跳脫字元
#[test]
fn test_custom_delimiter_and_escaped_quotes() -> Result<()> {
    let file = write_catalog("CSCI101;\"The \"\"Real\"\" Intro; Part 1\";CSCI100\r\nCSCI100;Seminar\r\n")?;
    let mut catalog = Catalog::with_parser(FieldParser::new(';', '"'));
    let report = catalog.load(&LocalStorage::new(), path_of(&file))?;

    assert!(report.warnings.is_empty());
    match catalog.lookup("CSCI101") {
        Lookup::Found(details) => {
            assert_eq!(details.title, r#"The "Real" Intro; Part 1"#);
            assert_eq!(details.prerequisites[0].title.as_deref(), Some("Seminar"));
        }
        other => panic!("expected CSCI101 to be found, got {:?}", other),
    }
    Ok(())
}

/// 測試空白查詢視為無效查詢而非查無課程
#[test]
fn test_empty_queries_are_invalid() {
    let mut catalog = Catalog::new();
    catalog.load_str("CSCI101,Intro");

    assert_eq!(catalog.lookup(""), Lookup::InvalidQuery);
    assert_eq!(catalog.lookup("   "), Lookup::InvalidQuery);
}

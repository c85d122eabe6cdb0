use super::*;

#[test]
fn notebook_has_nbformat_four_structure() {
    let raw = build_notebook("统计年龄分布", "### 结果\n18-25岁 不良率最高", None);
    let notebook: Value = serde_json::from_str(&raw).unwrap();
    assert_eq!(notebook["nbformat"], 4);
    let cells = notebook["cells"].as_array().unwrap();
    assert_eq!(cells.len(), 2);
    assert_eq!(cells[0]["cell_type"], "markdown");
    assert_eq!(cells[0]["source"][0], "## 统计年龄分布");
    assert_eq!(cells[1]["source"][0], "### 结果\n");
    assert_eq!(cells[1]["source"][1], "18-25岁 不良率最高");
}

#[test]
fn notebook_adds_code_cell_for_artifact() {
    let raw = build_notebook("q", "a", Some("/srv/out/run_01.ipynb"));
    let notebook: Value = serde_json::from_str(&raw).unwrap();
    let cells = notebook["cells"].as_array().unwrap();
    assert_eq!(cells.len(), 3);
    assert_eq!(cells[2]["cell_type"], "code");
    assert_eq!(cells[2]["source"][0], "# Generated code saved to: /srv/out/run_01.ipynb");
}

#[test]
fn filename_uses_basename_of_path() {
    assert_eq!(notebook_filename("/srv/out/run_01.ipynb"), "run_01.ipynb");
    assert_eq!(notebook_filename(r"C:\work\report.IPYNB"), "report.IPYNB");
    assert_eq!(notebook_filename("outputs/analysis_7"), "analysis_7.ipynb");
}

#[test]
fn filename_falls_back_for_blank_paths() {
    assert_eq!(notebook_filename(""), "analysis.ipynb");
    assert_eq!(notebook_filename("/srv/out/"), "analysis.ipynb");
}

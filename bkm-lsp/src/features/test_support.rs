/// The default document of the bookmark editor, used as shared test input.
pub(crate) const SAMPLE: &str = r#";document()
;setmargin(all=50)
;initfont(name="CMU", path="~/Library/Fonts/cmunrm.ttf")
;setfont(name="CMU", size=14)
;heading(): 8th - 21st
;paragraph():
  - Pull-ups            - 4 sets, rest 90s
  - Static holds        - 2 sets, hold 10s"#;
